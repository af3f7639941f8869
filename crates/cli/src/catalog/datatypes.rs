// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Primitive, object and collection data types.

use super::{array, object, quoted, Dynamic};
use crate::registry::{Registry, RegistryError};
use crate::unit::ExampleUnit;
use std::fmt;

struct Person {
    name: &'static str,
    age: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [("name", quoted(self.name)), ("age", self.age.to_string())];
        f.write_str(&object(&fields))
    }
}

struct Admin {
    name: &'static str,
    age: u32,
    is_admin: bool,
}

impl fmt::Display for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("name", quoted(self.name)),
            ("age", self.age.to_string()),
            ("isAdmin", self.is_admin.to_string()),
        ];
        f.write_str(&object(&fields))
    }
}

struct Product {
    id: u32,
    name: &'static str,
    price: u32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("id", self.id.to_string()),
            ("name", quoted(self.name)),
            ("price", self.price.to_string()),
        ];
        f.write_str(&object(&fields))
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy)]
enum Status {
    Pending,
    InProgress,
    Completed,
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("datatypes.primitives", "number, string and boolean", |host| {
            let (num, price, negative) = (10.0_f64, 99.99_f64, -5.0_f64);
            host.log_all([num, price, negative]);
            let first_name = "Rahul";
            host.log(format!("Hello {}", first_name));
            host.log_all([true, false]);
            Ok(())
        })
        .expect_text("10 99.99 -5\nHello Rahul\ntrue false"),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.special", "any and unknown", |host| {
            let assignments = [
                Dynamic::Number(10.0),
                Dynamic::Text("hello".into()),
                Dynamic::Bool(true),
            ];
            if let Some(data) = assignments.last() {
                host.log(data);
            }
            let value = Dynamic::Text("TypeScript".into());
            if let Dynamic::Text(text) = &value {
                host.log(text.to_uppercase());
            }
            Ok(())
        })
        .expect_text("true\nTYPESCRIPT"),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.objects", "Object types", |host| {
            host.log(Person { name: "Amit", age: 22 });
            host.log(Person { name: "Ravi", age: 21 });
            Ok(())
        })
        .expect_text("{ name: 'Amit', age: 22 }\n{ name: 'Ravi', age: 21 }"),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.collections", "Arrays and tuples", |host| {
            let numbers = [1, 2, 3, 4];
            let names: Vec<String> = ["A", "B", "C"].iter().map(|n| quoted(n)).collect();
            host.log_all([array(&numbers), array(&names)]);
            let person = (quoted("Raj"), 25);
            host.log(array(&[person.0, person.1.to_string()]));
            Ok(())
        })
        .expect_text("[ 1, 2, 3, 4 ] [ 'A', 'B', 'C' ]\n[ 'Raj', 25 ]"),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.union", "Union types", |host| {
            let ids = [Dynamic::Number(101.0), Dynamic::Text("A101".into())];
            if let Some(id) = ids.last() {
                host.log(id);
            }
            Ok(())
        })
        .expect_lines(["A101"]),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.aliases", "Type aliases and interfaces", |host| {
            host.log(Admin {
                name: "Admin",
                age: 30,
                is_admin: true,
            });
            host.log(Product {
                id: 1,
                name: "Laptop",
                price: 50000,
            });
            Ok(())
        })
        .expect_text(
            "{ name: 'Admin', age: 30, isAdmin: true }\n\
             { id: 1, name: 'Laptop', price: 50000 }",
        ),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.enum", "Enum data type", |host| {
            let task_status = Status::Pending;
            host.log(task_status as i32);
            Ok(())
        })
        .expect_lines(["0"]),
    )?;

    registry.register(
        ExampleUnit::new("datatypes.function", "Function types", |host| {
            let add: fn(i64, i64) -> i64 = |a, b| a + b;
            host.log(add(5, 3));
            Ok(())
        })
        .expect_lines(["8"]),
    )?;

    Ok(())
}
