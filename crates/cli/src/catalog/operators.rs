// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operators on numbers, booleans, references and optional values.

use crate::registry::{Registry, RegistryError};
use crate::unit::ExampleUnit;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("operators.arithmetic", "Arithmetic operators", |host| {
            let (n1, n2) = (8.0_f64, 3.0_f64);
            host.log(n1 + n2);
            host.log(n1 - n2);
            host.log(n1 * n2);
            host.log(n1 / n2);
            host.log(n1 % n2);
            host.log(n1.powf(n2));
            Ok(())
        })
        .expect_text("11\n5\n24\n2.6666666666666665\n2\n512"),
    )?;

    registry.register(
        ExampleUnit::new("operators.increment", "Increment and decrement", |host| {
            fn post_inc(a: &mut i32) -> i32 {
                let old = *a;
                *a += 1;
                old
            }
            fn post_dec(a: &mut i32) -> i32 {
                let old = *a;
                *a -= 1;
                old
            }
            let mut a = 5;
            a += 1;
            host.log(a);
            host.log(post_inc(&mut a));
            a -= 1;
            host.log(a);
            host.log(post_dec(&mut a));
            Ok(())
        })
        .expect_text("6\n6\n6\n6"),
    )?;

    registry.register(
        ExampleUnit::new("operators.modulus", "Modulus sign rules", |host| {
            let pairs = [
                (8.0, 3.0),
                (3.0, 8.0),
                (-8.0, 3.0),
                (8.0, -3.0),
                (3.0, -8.0),
                (-3.0, 8.0),
                (0.0, 6.0),
                (6.0, 0.0),
            ];
            for (a, b) in pairs {
                let rem: f64 = a % b;
                host.log(format!("{} % {} = {}", a, b, rem));
            }
            host.log(format!("Math.floor(8 / 3) = {}", (8.0_f64 / 3.0).floor()));
            host.log(format!("Math.floor(-8 / 3) = {}", (-8.0_f64 / 3.0).floor()));
            Ok(())
        })
        .expect_text(
            "8 % 3 = 2\n3 % 8 = 3\n-8 % 3 = -2\n8 % -3 = 2\n3 % -8 = 3\n\
             -3 % 8 = -3\n0 % 6 = 0\n6 % 0 = NaN\n\
             Math.floor(8 / 3) = 2\nMath.floor(-8 / 3) = -3",
        ),
    )?;

    registry.register(
        ExampleUnit::new("operators.assignment", "Assignment operators", |host| {
            let mut x: f64 = 10.0;
            x += 5.0;
            host.log(x);
            x -= 3.0;
            host.log(x);
            x *= 2.0;
            host.log(x);
            x /= 4.0;
            host.log(x);
            x %= 3.0;
            host.log(x);
            x = x.powi(2);
            host.log(x);

            // ??= only fills a missing value
            let mut na: Option<i32> = None;
            host.log(*na.get_or_insert(30));
            na = Some(0);
            host.log(*na.get_or_insert(40));
            Ok(())
        })
        .expect_text("15\n12\n24\n6\n0\n0\n30\n0"),
    )?;

    registry.register(
        ExampleUnit::new("operators.comparison", "Comparison operators", |host| {
            let (four, five, six, other_five) = (4, 5, 6, 5);
            host.log(five == other_five);
            host.log(six > five);
            host.log(six < five);
            host.log(five >= other_five);
            host.log(five <= four);
            Ok(())
        })
        .expect_text("true\ntrue\nfalse\ntrue\nfalse"),
    )?;

    registry.register(
        ExampleUnit::new("operators.logical", "Logical operators", |host| {
            let (t, f) = (true, false);
            host.log(t && f);
            host.log(t || f);
            host.log(!t);
            Ok(())
        })
        .expect_text("false\ntrue\nfalse"),
    )?;

    registry.register(
        ExampleUnit::new("operators.identity", "Reference identity", |host| {
            let obj1 = Rc::new(10);
            let obj2 = Rc::new(10);
            let obj3 = Rc::clone(&obj1);
            host.log(Rc::ptr_eq(&obj1, &obj2));
            host.log(Rc::ptr_eq(&obj1, &obj3));
            Ok(())
        })
        .expect_text("false\ntrue"),
    )?;

    registry.register(
        ExampleUnit::new("operators.membership", "Membership checks", |host| {
            let student = HashMap::from([("name", "Aman"), ("age", "20")]);
            host.log(student.contains_key("name"));
            host.log(student.contains_key("marks"));
            host.log([1, 2, 3].contains(&2));
            host.log("typescript".contains("script"));
            Ok(())
        })
        .expect_text("true\nfalse\ntrue\ntrue"),
    )?;

    registry.register(
        ExampleUnit::new("operators.bitwise", "Bitwise operators", |host| {
            host.log(5 & 1);
            host.log(5 | 1);
            host.log(5 ^ 1);
            host.log(!5_i32);
            host.log(5 << 1);
            host.log(5_i32 >> 1);
            host.log(5_u32 >> 1);
            Ok(())
        })
        .expect_text("1\n5\n4\n-6\n10\n2\n2"),
    )?;

    registry.register(
        ExampleUnit::new("operators.type_checks", "Type-related operators", |host| {
            let unknown: Box<dyn Any + Send> = Box::new("TypeScript");
            if let Some(text) = unknown.downcast_ref::<&str>() {
                host.log(text.to_uppercase());
            }
            let arr: Box<dyn Any + Send> = Box::new(vec![1, 2, 3]);
            if arr.is::<Vec<i32>>() {
                host.log("This is an array");
            }
            let any_value: Box<dyn Any + Send> = Box::new(String::from("Hello"));
            if let Some(text) = any_value.downcast_ref::<String>() {
                host.log(text.len());
            }
            Ok(())
        })
        .expect_text("TYPESCRIPT\nThis is an array\n5"),
    )?;

    registry.register(
        ExampleUnit::new("operators.conditional", "Conditional operator", |host| {
            let age = 18;
            host.log(if age >= 18 { "Eligible" } else { "Not Eligible" });
            Ok(())
        })
        .expect_lines(["Eligible"]),
    )?;

    registry.register(
        ExampleUnit::new("operators.nullish", "Nullish coalescing", |host| {
            for val in [None, None, Some(0)] {
                host.log(val.unwrap_or(50));
            }
            Ok(())
        })
        .expect_text("50\n50\n0"),
    )?;

    registry.register(
        ExampleUnit::new("operators.optional_chaining", "Optional chaining", |host| {
            struct Address {
                city: Option<String>,
            }
            struct User {
                address: Option<Address>,
            }
            let user = User { address: None };
            let city = user.address.and_then(|a| a.city);
            host.log(city.as_deref().unwrap_or("undefined"));
            Ok(())
        })
        .expect_lines(["undefined"]),
    )?;

    Ok(())
}
