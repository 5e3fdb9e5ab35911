// An exact rational number lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{cmp::Ordering, env, io};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rational64::{Rational, RationalResult};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// 精确有理数计算器
///
/// 所有操作数都以 “分子 分母” 两个整数给出。
#[derive(Parser, Debug)]
#[command(name = "rational64", version, about)]
struct Cli {
    /// 日志详细程度 (-v: info, -vv: debug)，RUST_LOG 会叠加在其上
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// 以带分数形式输出运算结果
    #[arg(long, global = true)]
    mixed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 显示一个分数的最简形式、带分数形式、浮点近似以及各项性质
    Show(Operand),
    /// lhs + rhs
    Add(Binary),
    /// lhs - rhs
    Sub(Binary),
    /// lhs * rhs
    Mul(Binary),
    /// lhs / rhs
    Div(Binary),
    /// base ^ exp，exp 必须是非负整数
    Pow {
        #[arg(allow_negative_numbers = true)]
        nume: i64,
        #[arg(allow_negative_numbers = true)]
        deno: i64,
        #[arg(allow_negative_numbers = true)]
        exp: i64,
    },
    /// 比较两个分数
    Cmp(Binary),
    /// 判断两个分数之差的绝对值是否恰好为 1
    Adjacent(Binary),
}

#[derive(Args, Debug)]
struct Operand {
    #[arg(allow_negative_numbers = true)]
    nume: i64,
    #[arg(allow_negative_numbers = true, default_value_t = 1)]
    deno: i64,
}

impl Operand {
    fn build(&self) -> anyhow::Result<Rational> {
        Rational::new(self.nume, self.deno)
            .with_context(|| format!("invalid operand {} / {}", self.nume, self.deno))
    }
}

#[derive(Args, Debug)]
struct Binary {
    #[arg(allow_negative_numbers = true)]
    lhs_nume: i64,
    #[arg(allow_negative_numbers = true)]
    lhs_deno: i64,
    #[arg(allow_negative_numbers = true)]
    rhs_nume: i64,
    #[arg(allow_negative_numbers = true)]
    rhs_deno: i64,
}

impl Binary {
    fn build(&self) -> anyhow::Result<(Rational, Rational)> {
        let lhs = Rational::new(self.lhs_nume, self.lhs_deno)
            .with_context(|| format!("invalid left operand {} / {}", self.lhs_nume, self.lhs_deno))?;
        let rhs = Rational::new(self.rhs_nume, self.rhs_deno)
            .with_context(|| format!("invalid right operand {} / {}", self.rhs_nume, self.rhs_deno))?;
        tracing::debug!(%lhs, %rhs, "operands");
        Ok((lhs, rhs))
    }

    fn apply(
        &self,
        name: &str,
        op: fn(Rational, Rational) -> RationalResult<Rational>,
    ) -> anyhow::Result<Rational> {
        let (lhs, rhs) = self.build()?;
        op(lhs, rhs).with_context(|| format!("cannot evaluate {name} of {lhs} and {rhs}"))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let mut env_filter = EnvFilter::default().add_directive(level.into());

    if let Ok(rust_log) = env::var("RUST_LOG") {
        for directive in rust_log.split(',').filter_map(|s| match s.parse() {
            Ok(directive) => Some(directive),
            Err(err) => {
                eprintln!("Ignoring directive `{}`: {}", s, err);
                None
            }
        }) {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn render(value: Rational, mixed: bool) -> String {
    if mixed {
        value.as_mixed_number()
    } else {
        value.to_string()
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    tracing::info!(command = ?cli.command, "running");

    let output = match &cli.command {
        Command::Show(operand) => {
            let value = operand.build()?;
            [
                format!("value: {value}"),
                format!("mixed: {}", value.as_mixed_number()),
                format!("float: {}", f64::from(value)),
                format!(
                    "zero: {}, integer: {}, proper: {}, unit: {}",
                    value.is_zero(),
                    value.is_integer(),
                    value.is_proper(),
                    value.is_unit()
                ),
            ]
            .join("\n")
        }
        Command::Add(binary) => render(binary.apply("sum", Rational::checked_add)?, cli.mixed),
        Command::Sub(binary) => render(binary.apply("difference", Rational::checked_sub)?, cli.mixed),
        Command::Mul(binary) => render(binary.apply("product", Rational::checked_mul)?, cli.mixed),
        Command::Div(binary) => render(binary.apply("quotient", Rational::checked_div)?, cli.mixed),
        Command::Pow { nume, deno, exp } => {
            let base = Operand { nume: *nume, deno: *deno }.build()?;
            let value = base
                .checked_pow(*exp)
                .with_context(|| format!("cannot raise {base} to the power {exp}"))?;
            render(value, cli.mixed)
        }
        Command::Cmp(binary) => {
            let (lhs, rhs) = binary.build()?;
            let relation = match lhs.cmp(&rhs) {
                Ordering::Less => "<",
                Ordering::Equal => "==",
                Ordering::Greater => ">",
            };
            format!("{lhs} {relation} {rhs}")
        }
        Command::Adjacent(binary) => {
            let (lhs, rhs) = binary.build()?;
            lhs.is_adjacent_to(&rhs).to_string()
        }
    };

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
