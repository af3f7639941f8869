// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in global functions: conversions, timers, math, dates and JSON.
//!
//! The dialog units (`alert`, `prompt`, `confirm`) need a person at a
//! browser and are registered as manual.

use crate::registry::{Registry, RegistryError};
use crate::unit::{ExampleUnit, UnitError};
use chrono::{Datelike, Local};
use primer_compare::ExpectedLine;
use serde::{Deserialize, Serialize};

/// Integer prefix of `text`, or NaN when there is none
fn parse_int(text: &str) -> f64 {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |end| end + sign_len);
    text[..digits].parse::<i64>().map_or(f64::NAN, |n| n as f64)
}

/// Longest numeric prefix of `text`, or NaN when there is none
fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Whole-string conversion; anything unparsable is NaN
fn to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Serialize, Deserialize)]
struct User {
    name: String,
    age: u32,
}

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(
        ExampleUnit::new("builtins.console_log", "console.log()", |host| {
            host.log("Hello TypeScript");
            Ok(())
        })
        .expect_lines(["Hello TypeScript"]),
    )?;

    registry.register(
        ExampleUnit::new("builtins.alert", "alert()", |host| {
            host.log("Welcome to TypeScript");
            Ok(())
        })
        .expect_lines(["Welcome to TypeScript"])
        .manual(),
    )?;

    registry.register(
        ExampleUnit::new("builtins.prompt", "prompt()", |host| {
            host.log("Rahul");
            Ok(())
        })
        .expect_lines(["Rahul"])
        .manual(),
    )?;

    registry.register(
        ExampleUnit::new("builtins.confirm", "confirm()", |host| {
            host.log(true);
            Ok(())
        })
        .expect_line(ExpectedLine::approx("true or false", |line| {
            line == "true" || line == "false"
        }))
        .manual(),
    )?;

    registry.register(
        ExampleUnit::new("builtins.parse_int", "parseInt()", |host| {
            host.log(parse_int("123"));
            host.log(parse_int("123abc"));
            Ok(())
        })
        .expect_text("123\n123"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.parse_float", "parseFloat()", |host| {
            host.log(parse_float("12.5"));
            host.log(parse_float("12.5abc"));
            Ok(())
        })
        .expect_text("12.5\n12.5"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.number", "Number()", |host| {
            host.log(to_number("123"));
            host.log(f64::from(u8::from(true)));
            host.log(to_number("abc"));
            Ok(())
        })
        .expect_text("123\n1\nNaN"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.string", "String()", |host| {
            host.log(format!("{:?}", 100.to_string()));
            host.log(format!("{:?}", true.to_string()));
            Ok(())
        })
        .expect_text("\"100\"\n\"true\""),
    )?;

    registry.register(
        ExampleUnit::new("builtins.boolean", "Boolean()", |host| {
            let (one, zero, empty) = (1, 0, "");
            host.log(one != 0);
            host.log(zero != 0);
            host.log(!empty.is_empty());
            Ok(())
        })
        .expect_text("true\nfalse\nfalse"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.is_nan", "isNaN()", |host| {
            host.log(to_number("TS").is_nan());
            host.log(10.0_f64.is_nan());
            Ok(())
        })
        .expect_text("true\nfalse"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.is_finite", "isFinite()", |host| {
            host.log(100.0_f64.is_finite());
            host.log(f64::INFINITY.is_finite());
            Ok(())
        })
        .expect_text("true\nfalse"),
    )?;

    registry.register(
        ExampleUnit::new("builtins.set_timeout", "setTimeout()", |host| {
            host.schedule_once(2000, |host, _| {
                host.log("Runs after 2 seconds");
                Ok(())
            });
            Ok(())
        })
        .expect_lines(["Runs after 2 seconds"]),
    )?;

    registry.register(
        ExampleUnit::new(
            "builtins.set_interval",
            "setInterval() and clearInterval()",
            |host| {
                let mut ticks = 0;
                host.schedule_repeating(1000, move |host, handle| {
                    host.log("Repeats every second");
                    ticks += 1;
                    if ticks == 3 {
                        handle.cancel();
                        host.log("Interval stopped");
                    }
                    Ok(())
                });
                Ok(())
            },
        )
        .expect_text(
            "Repeats every second\nRepeats every second\nRepeats every second\n\
             Interval stopped",
        ),
    )?;

    registry.register(
        ExampleUnit::new("builtins.clear_timeout", "clearTimeout()", |host| {
            let timeout = host.schedule_once(3000, |host, _| {
                host.log("This will not run");
                Ok(())
            });
            timeout.cancel();
            Ok(())
        }),
    )?;

    registry.register(
        ExampleUnit::new("builtins.math", "Math functions", |host| {
            let max = [10, 20, 30].into_iter().max().unwrap_or_default();
            let min = [5, 2, 8].into_iter().min().unwrap_or_default();
            host.log(max);
            host.log(min);
            host.log(25.0_f64.sqrt());
            host.log(2.0_f64.powi(3));
            host.log(fastrand::f64());
            Ok(())
        })
        .expect_text("30\n2\n5\n8")
        .expect_line(ExpectedLine::number_in(0.0, 1.0)),
    )?;

    registry.register(
        ExampleUnit::new("builtins.date", "Date functions", |host| {
            let today = Local::now();
            host.log(today.year());
            host.log(today.month0());
            host.log(today.day());
            host.log(today.weekday().num_days_from_sunday());
            Ok(())
        })
        .expect_lines([
            ExpectedLine::number_in(1970.0, 10000.0),
            ExpectedLine::number_in(0.0, 12.0),
            ExpectedLine::number_in(1.0, 32.0),
            ExpectedLine::number_in(0.0, 7.0),
        ]),
    )?;

    registry.register(
        ExampleUnit::new("builtins.json", "JSON functions", |host| {
            let user = User {
                name: "jairam".into(),
                age: 22,
            };
            let json = serde_json::to_string(&user).map_err(|e| UnitError::from_error(&e))?;
            let parsed: User = serde_json::from_str(&json).map_err(|e| UnitError::from_error(&e))?;
            host.log(&json);
            host.log(format!("{{ name: {:?}, age: {} }}", parsed.name, parsed.age));
            Ok(())
        })
        .expect_text("{\"name\":\"jairam\",\"age\":22}\n{ name: \"jairam\", age: 22 }"),
    )?;

    Ok(())
}

#[cfg(test)]
#[path = "builtins_tests.rs"]
mod tests;
