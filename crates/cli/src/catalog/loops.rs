// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loop statements.

use crate::registry::{Registry, RegistryError};
use crate::unit::ExampleUnit;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("loops.for", "for loop", |host| {
            for i in 1..=5 {
                host.log(i);
            }
            Ok(())
        })
        .expect_text("1\n2\n3\n4\n5"),
    )?;

    registry.register(
        ExampleUnit::new("loops.while", "while loop", |host| {
            let mut w = 1;
            while w <= 3 {
                host.log(w);
                w += 1;
            }
            Ok(())
        })
        .expect_text("1\n2\n3"),
    )?;

    registry.register(
        ExampleUnit::new("loops.do_while", "do-while loop", |host| {
            // Body runs before the first check
            let mut d = 1;
            loop {
                host.log(d);
                d += 1;
                if d > 3 {
                    break;
                }
            }
            Ok(())
        })
        .expect_text("1\n2\n3"),
    )?;

    registry.register(
        ExampleUnit::new("loops.for_of", "for...of over values", |host| {
            let fruits = ["Apple", "Banana", "Mango"];
            for fruit in fruits {
                host.log(fruit);
            }
            Ok(())
        })
        .expect_text("Apple\nBanana\nMango"),
    )?;

    registry.register(
        ExampleUnit::new("loops.for_in", "for...in over keys", |host| {
            let user = [("name", "Rahul"), ("age", "21"), ("city", "Nagpur")];
            for (key, value) in user {
                host.log(format!("{} : {}", key, value));
            }
            Ok(())
        })
        .expect_text("name : Rahul\nage : 21\ncity : Nagpur"),
    )?;

    registry.register(
        ExampleUnit::new("loops.break", "break statement", |host| {
            for n in 1..=5 {
                if n == 3 {
                    break;
                }
                host.log(n);
            }
            Ok(())
        })
        .expect_text("1\n2"),
    )?;

    registry.register(
        ExampleUnit::new("loops.continue", "continue statement", |host| {
            for n in 1..=5 {
                if n == 3 {
                    continue;
                }
                host.log(n);
            }
            Ok(())
        })
        .expect_text("1\n2\n4\n5"),
    )?;

    registry.register(
        ExampleUnit::new("loops.nested", "Nested loops", |host| {
            for i in 1..=2 {
                for j in 1..=3 {
                    host.log_all(["i =".to_string(), i.to_string(), "j =".into(), j.to_string()]);
                }
            }
            Ok(())
        })
        .expect_text(
            "i = 1 j = 1\ni = 1 j = 2\ni = 1 j = 3\n\
             i = 2 j = 1\ni = 2 j = 2\ni = 2 j = 3",
        ),
    )?;

    registry.register(
        ExampleUnit::new("loops.labeled", "Labeled loops", |host| {
            'outer: for i in 1..=3 {
                for j in 1..=3 {
                    if i == 2 && j == 2 {
                        break 'outer;
                    }
                    host.log_all(["i =".to_string(), i.to_string(), "j =".into(), j.to_string()]);
                }
            }
            Ok(())
        })
        .expect_text("i = 1 j = 1\ni = 1 j = 2\ni = 1 j = 3\ni = 2 j = 1"),
    )?;

    registry.register(
        ExampleUnit::new("loops.for_each", "Array forEach", |host| {
            [1, 2, 3].iter().for_each(|value| host.log(value));
            Ok(())
        })
        .expect_text("1\n2\n3"),
    )?;

    Ok(())
}
