// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Functions, closures and methods.

use crate::registry::{Registry, RegistryError};
use crate::unit::{ExampleUnit, Host};

/// Same name, one implementation per argument type
trait Combine {
    fn combine(self, other: Self) -> String;
}

impl Combine for i64 {
    fn combine(self, other: Self) -> String {
        (self + other).to_string()
    }
}

impl Combine for &str {
    fn combine(self, other: Self) -> String {
        format!("{}{}", self, other)
    }
}

struct Calculator {
    num1: i64,
    num2: i64,
}

impl Calculator {
    fn add(&self) -> i64 {
        self.num1 + self.num2
    }

    fn subtract(&self) -> i64 {
        self.num1 - self.num2
    }
}

struct Person {
    name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn greet(&self, host: &Host) {
        host.log(format!("Hello, my name is {}", self.name));
    }
}

fn display_name(host: &Host, first_name: &str, last_name: Option<&str>) {
    host.log_all([first_name, last_name.unwrap_or("undefined")]);
}

fn power(base: i64, exponent: Option<u32>) -> i64 {
    base.pow(exponent.unwrap_or(2))
}

fn sum_all(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("functions.simple", "Simple function", |host| {
            fn greet(host: &Host) {
                host.log("Hello TypeScript");
            }
            greet(host);
            Ok(())
        })
        .expect_lines(["Hello TypeScript"]),
    )?;

    registry.register(
        ExampleUnit::new("functions.parameters", "Function with parameters", |host| {
            let add = |a: i64, b: i64| host.log(a + b);
            add(5, 3);
            Ok(())
        })
        .expect_lines(["8"]),
    )?;

    registry.register(
        ExampleUnit::new("functions.return_type", "Function with return type", |host| {
            fn multiply(x: i64, y: i64) -> i64 {
                x * y
            }
            host.log(multiply(4, 5));
            Ok(())
        })
        .expect_lines(["20"]),
    )?;

    registry.register(
        ExampleUnit::new("functions.arrow", "Arrow function", |host| {
            let subtract = |a: i64, b: i64| a - b;
            host.log(subtract(10, 4));
            Ok(())
        })
        .expect_lines(["6"]),
    )?;

    registry.register(
        ExampleUnit::new("functions.optional", "Optional parameters", |host| {
            display_name(host, "Rahul", None);
            display_name(host, "Rahul", Some("Sharma"));
            Ok(())
        })
        .expect_text("Rahul undefined\nRahul Sharma"),
    )?;

    registry.register(
        ExampleUnit::new("functions.default", "Default parameters", |host| {
            host.log(power(5, None));
            host.log(power(5, Some(3)));
            Ok(())
        })
        .expect_text("25\n125"),
    )?;

    registry.register(
        ExampleUnit::new("functions.rest", "Rest parameters", |host| {
            host.log(sum_all(&[1, 2, 3]));
            host.log(sum_all(&[10, 20, 30, 40]));
            Ok(())
        })
        .expect_text("6\n100"),
    )?;

    registry.register(
        ExampleUnit::new("functions.anonymous", "Anonymous function", |host| {
            let message: Box<dyn Fn(&Host)> =
                Box::new(|host: &Host| host.log("This is an anonymous function"));
            message(host);
            Ok(())
        })
        .expect_lines(["This is an anonymous function"]),
    )?;

    registry.register(
        ExampleUnit::new("functions.overloading", "Function overloading", |host| {
            host.log(10i64.combine(20));
            host.log("Hello ".combine("World"));
            Ok(())
        })
        .expect_text("30\nHello World"),
    )?;

    registry.register(
        ExampleUnit::new("functions.object_methods", "Methods inside an object", |host| {
            let calculator = Calculator { num1: 10, num2: 5 };
            host.log(calculator.add());
            host.log(calculator.subtract());
            Ok(())
        })
        .expect_text("15\n5"),
    )?;

    registry.register(
        ExampleUnit::new("functions.class_methods", "Methods inside a class", |host| {
            Person::new("Amit").greet(host);
            Ok(())
        })
        .expect_lines(["Hello, my name is Amit"]),
    )?;

    Ok(())
}
