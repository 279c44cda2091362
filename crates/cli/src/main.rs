use std::error::Error;

use api_types::expense::ExpenseItem;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use expenses_cli::{Client, Session};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "expenses-cli")]
#[command(about = "Record and inspect expenses through the expense tracker API")]
struct Cli {
    /// Base URL of the API (also read from `EXPENSES_URL`).
    #[arg(long, env = "EXPENSES_URL", default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Bearer token printed by `login` (also read from `EXPENSES_TOKEN`).
    #[arg(long, env = "EXPENSES_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new account
    Register(Credentials),
    /// Log in and print the token to export
    Login(Credentials),
    /// Show the expenses of a day
    Show {
        #[arg(long)]
        date: NaiveDate,
    },
    /// Replace the expenses of a day; no `--item` clears it
    Set {
        #[arg(long)]
        date: NaiveDate,
        /// `AMOUNT:CATEGORY[:NOTES]`, repeatable
        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<ExpenseItem>,
    },
    /// List every recorded expense
    All,
    /// Spending per category over an inclusive date range
    Breakdown {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Spending per month
    Monthly,
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

fn parse_item(value: &str) -> Result<ExpenseItem, String> {
    let mut parts = value.splitn(3, ':');
    let amount = parts
        .next()
        .unwrap_or_default()
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid amount in '{value}': {err}"))?;
    let category = parts
        .next()
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .ok_or_else(|| format!("missing category in '{value}'"))?;
    let notes = parts.next().unwrap_or_default();

    Ok(ExpenseItem {
        amount,
        category: category.to_string(),
        notes: notes.to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let client = Client::new(&cli.url)?;
    let session = || {
        cli.token
            .clone()
            .map(Session::from_token)
            .ok_or("missing token: run `login` and export EXPENSES_TOKEN")
    };

    match cli.command {
        Command::Register(credentials) => {
            let message = client
                .register(&credentials.username, &credentials.password)
                .await?;
            println!("{}", message.message);
        }
        Command::Login(credentials) => {
            let session = client
                .login(&credentials.username, &credentials.password)
                .await?;
            println!("export EXPENSES_TOKEN={}", session.access_token);
        }
        Command::Show { date } => {
            print_json(&client.expenses_for_date(&session()?, date).await?)?;
        }
        Command::Set { date, items } => {
            let message = client.replace_expenses(&session()?, date, &items).await?;
            println!("{}", message.message);
        }
        Command::All => print_json(&client.all_expenses(&session()?).await?)?,
        Command::Breakdown { from, to } => {
            print_json(&client.category_breakdown(&session()?, from, to).await?)?;
        }
        Command::Monthly => print_json(&client.monthly_totals(&session()?).await?)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_with_notes() {
        let item = parse_item("12.5:Food:lunch: with Bob").unwrap();
        assert_eq!(item.amount, 12.5);
        assert_eq!(item.category, "Food");
        assert_eq!(item.notes, "lunch: with Bob");
    }

    #[test]
    fn item_without_notes() {
        let item = parse_item("800:Rent").unwrap();
        assert_eq!(item.amount, 800.0);
        assert_eq!(item.category, "Rent");
        assert_eq!(item.notes, "");
    }

    #[test]
    fn item_errors() {
        assert!(parse_item("ten:Food").is_err());
        assert!(parse_item("10").is_err());
        assert!(parse_item("10: ").is_err());
    }

    #[test]
    fn set_collects_repeated_items() {
        let cli = Cli::try_parse_from([
            "expenses-cli",
            "--token",
            "abc",
            "set",
            "--date",
            "2024-08-15",
            "--item",
            "50:Food",
            "--item",
            "50:Rent",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("abc"));
        match cli.command {
            Command::Set { date, items } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
