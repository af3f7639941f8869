// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration keywords, type constructs and class modifiers.

use super::{array, object, quoted, Dynamic};
use crate::registry::{Registry, RegistryError};
use crate::unit::{ExampleUnit, Host, UnitError};
use std::convert::Infallible;
use std::fmt;

enum UserId {
    Number(u32),
    Text(&'static str),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[allow(dead_code)]
#[derive(Clone, Copy)]
enum Outcome {
    Success,
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        })
    }
}

trait Printable {
    fn print(&self, host: &Host);
}

struct Report;

impl Printable for Report {
    fn print(&self, host: &Host) {
        host.log("Printing report");
    }
}

trait Animal {
    fn eat(&self, host: &Host) {
        host.log("Eating");
    }
}

struct Dog;

impl Animal for Dog {}

impl Dog {
    fn bark(&self, host: &Host) {
        host.log("Barking");
    }
}

mod bank {
    pub struct Bank {
        balance: u32,
    }

    impl Bank {
        pub fn open() -> Self {
            Self { balance: 1000 }
        }

        pub fn balance(&self) -> u32 {
            self.balance
        }
    }
}

/// Base whose field only embedding types may read
struct Account {
    amount: u32,
}

struct Savings {
    account: Account,
}

impl Savings {
    fn show(&self, host: &Host) {
        host.log(self.account.amount);
    }
}

struct Product {
    id: u32,
}

impl Product {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Never returns normally
fn throw_error(msg: &str) -> Result<Infallible, UnitError> {
    Err(UnitError::new(msg))
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("keywords.let", "let", |host| {
            let mut age = 25;
            age += 5;
            host.log(age);
            Ok(())
        })
        .expect_lines(["30"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.const", "const", |host| {
            let pi = (std::f64::consts::PI * 100.0).round() / 100.0;
            host.log(pi);
            Ok(())
        })
        .expect_lines(["3.14"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.var", "var", |host| {
            let mut city = String::from("Delhi");
            city.replace_range(.., "Mumbai");
            host.log(city);
            Ok(())
        })
        .expect_lines(["Mumbai"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.type", "type", |host| {
            let id1 = UserId::Number(101);
            let id2 = UserId::Text("A102");
            host.log_all([id1, id2]);
            Ok(())
        })
        .expect_lines(["101 A102"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.interface", "interface", |host| {
            host.log(object(&[("name", quoted("Rahul")), ("age", 22.to_string())]));
            Ok(())
        })
        .expect_lines(["{ name: 'Rahul', age: 22 }"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.enum", "enum", |host| {
            let direction = Direction::Up;
            host.log(direction as i32);
            Ok(())
        })
        .expect_lines(["0"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.any", "any", |host| {
            let assignments = [
                Dynamic::Number(10.0),
                Dynamic::Text("Hello".into()),
                Dynamic::Bool(true),
            ];
            if let Some(value) = assignments.last() {
                host.log(value);
            }
            Ok(())
        })
        .expect_lines(["true"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.unknown", "unknown", |host| {
            let data = Dynamic::Text("TypeScript".into());
            if let Dynamic::Text(text) = &data {
                host.log(text);
            }
            Ok(())
        })
        .expect_lines(["TypeScript"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.never", "never", |_| {
            match throw_error("Something went wrong")? {}
        })
        .expect_lines(["Something went wrong"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.void", "void", |host| {
            fn log_message(host: &Host) {
                host.log("Hello TypeScript");
            }
            log_message(host);
            Ok(())
        })
        .expect_lines(["Hello TypeScript"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.primitives", "boolean, number and string", |host| {
            host.log(true);
            host.log(99.5);
            host.log("Admin");
            Ok(())
        })
        .expect_text("true\n99.5\nAdmin"),
    )?;

    registry.register(
        ExampleUnit::new("keywords.array", "array", |host| {
            host.log(array(&[1, 2, 3, 4]));
            Ok(())
        })
        .expect_lines(["[ 1, 2, 3, 4 ]"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.tuple", "tuple", |host| {
            let user_info: (u32, &str) = (1, "Amit");
            host.log(array(&[user_info.0.to_string(), quoted(user_info.1)]));
            Ok(())
        })
        .expect_lines(["[ 1, 'Amit' ]"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.union", "union", |host| {
            for result in [UserId::Number(10), UserId::Text("Success")] {
                host.log(result);
            }
            Ok(())
        })
        .expect_text("10\nSuccess"),
    )?;

    registry.register(
        ExampleUnit::new("keywords.literal", "literal", |host| {
            host.log(Outcome::Success);
            Ok(())
        })
        .expect_lines(["success"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.function", "function", |host| {
            fn add(a: i64, b: i64) -> i64 {
                a + b
            }
            host.log(add(2, 3));
            Ok(())
        })
        .expect_lines(["5"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.class", "class", |host| {
            struct Student {
                name: String,
            }
            impl Student {
                fn greet(&self, host: &Host) {
                    host.log(format!("Hello {}", self.name));
                }
            }
            let s1 = Student {
                name: "Ravi".into(),
            };
            s1.greet(host);
            Ok(())
        })
        .expect_lines(["Hello Ravi"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.implements", "implements", |host| {
            Report.print(host);
            Ok(())
        })
        .expect_lines(["Printing report"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.extends", "extends", |host| {
            let d1 = Dog;
            d1.eat(host);
            d1.bark(host);
            Ok(())
        })
        .expect_text("Eating\nBarking"),
    )?;

    registry.register(
        ExampleUnit::new("keywords.public", "public", |host| {
            struct Car {
                model: String,
            }
            let c1 = Car {
                model: "BMW".into(),
            };
            host.log(c1.model);
            Ok(())
        })
        .expect_lines(["BMW"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.private", "private", |host| {
            host.log(bank::Bank::open().balance());
            Ok(())
        })
        .expect_lines(["1000"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.protected", "protected", |host| {
            let savings = Savings {
                account: Account { amount: 500 },
            };
            savings.show(host);
            Ok(())
        })
        .expect_lines(["500"]),
    )?;

    registry.register(
        ExampleUnit::new("keywords.readonly", "readonly", |host| {
            let p1 = Product { id: 101 };
            host.log(p1.id());
            Ok(())
        })
        .expect_lines(["101"]),
    )?;

    Ok(())
}
