// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branching: if, else, ladders, switch and type guards.

use crate::registry::{Registry, RegistryError};
use crate::unit::ExampleUnit;
use std::any::Any;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("conditionals.if", "if statement", |host| {
            let age = 20;
            if age >= 18 {
                host.log("Eligible to vote");
            }
            Ok(())
        })
        .expect_lines(["Eligible to vote"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.if_else", "if-else statement", |host| {
            let marks = 35;
            if marks >= 40 {
                host.log("Pass");
            } else {
                host.log("Fail");
            }
            Ok(())
        })
        .expect_lines(["Fail"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.ladder", "if-else if-else ladder", |host| {
            let score = 78;
            let grade = if score >= 90 {
                "Grade A"
            } else if score >= 75 {
                "Grade B"
            } else if score >= 60 {
                "Grade C"
            } else {
                "Fail"
            };
            host.log(grade);
            Ok(())
        })
        .expect_lines(["Grade B"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.nested_if", "Nested if", |host| {
            let (username, password) = ("admin", "1234");
            if username == "admin" {
                if password == "1234" {
                    host.log("Login successful");
                } else {
                    host.log("Incorrect password");
                }
            } else {
                host.log("Invalid username");
            }
            Ok(())
        })
        .expect_lines(["Login successful"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.switch", "switch statement", |host| {
            let day = 3;
            let name = match day {
                1 => "Monday",
                2 => "Tuesday",
                3 => "Wednesday",
                4 => "Thursday",
                5 => "Friday",
                _ => "Invalid day",
            };
            host.log(name);
            Ok(())
        })
        .expect_lines(["Wednesday"]),
    )?;

    registry.register(
        ExampleUnit::new(
            "conditionals.switch_fallthrough",
            "switch without break",
            |host| {
                // Cases without break run every later case body too
                let cases = [(1, "One"), (2, "Two"), (3, "Three")];
                let num = 2;
                if let Some(start) = cases.iter().position(|(case, _)| *case == num) {
                    for (_, body) in &cases[start..] {
                        host.log(body);
                    }
                }
                Ok(())
            },
        )
        .expect_text("Two\nThree\n"),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.ternary", "Ternary operator", |host| {
            let age = 16;
            host.log(if age >= 18 { "Adult" } else { "Minor" });
            Ok(())
        })
        .expect_lines(["Minor"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.nested_ternary", "Nested ternary", |host| {
            let n: i32 = 0;
            let kind = match n.signum() {
                1 => "Positive",
                -1 => "Negative",
                _ => "Zero",
            };
            host.log(kind);
            Ok(())
        })
        .expect_lines(["Zero"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.truthy", "Truthy and falsy values", |host| {
            let value = "";
            host.log(if value.is_empty() {
                "Falsy value"
            } else {
                "Truthy value"
            });
            Ok(())
        })
        .expect_lines(["Falsy value"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.typeof_guard", "typeof type guard", |host| {
            let unknown: Box<dyn Any + Send> = Box::new("TypeScript");
            if let Some(text) = unknown.downcast_ref::<&str>() {
                host.log(text.to_uppercase());
            }
            Ok(())
        })
        .expect_lines(["TYPESCRIPT"]),
    )?;

    registry.register(
        ExampleUnit::new(
            "conditionals.instanceof_guard",
            "instanceof type guard",
            |host| {
                let arr: Box<dyn Any + Send> = Box::new(vec![1, 2, 3]);
                if arr.is::<Vec<i32>>() {
                    host.log("This is an array");
                }
                Ok(())
            },
        )
        .expect_lines(["This is an array"]),
    )?;

    registry.register(
        ExampleUnit::new("conditionals.custom_guard", "Custom type guard", |host| {
            struct User {
                name: String,
            }
            let data: Box<dyn Any + Send> = Box::new(User {
                name: "Rahul".to_string(),
            });
            if let Some(user) = data.downcast_ref::<User>() {
                host.log(&user.name);
            }
            Ok(())
        })
        .expect_lines(["Rahul"]),
    )?;

    Ok(())
}
