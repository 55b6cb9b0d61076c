use anyhow::{bail, Context, Result};

use deal_desk::dashboard::{report, DealField};
use deal_desk::shell::{Section, Shell};
use deal_desk::trading::{table, FormField};

pub const USAGE: &str = "\
usage: deal-desk [section]
       deal-desk dashboard list
       deal-desk dashboard add <client> <amount> <profit>
       deal-desk deals preview [field=value ...]
       deal-desk deals add [field=value ...]
       deal-desk deals edit <id> [field=value ...]

trading deal fields: trader_name platform trade_date buy_rub buy_usd
                     buy_rate buy_deal_id sell_rate sell_order_number";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show(Section),
    ListDeals,
    AddDeal {
        client: String,
        amount: String,
        profit: String,
    },
    PreviewTrade(Vec<(FormField, String)>),
    AddTrade(Vec<(FormField, String)>),
    EditTrade(i64, Vec<(FormField, String)>),
}

/// Arguments after the program name.
pub fn parse(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Show(Section::default()));
    };
    let section = Section::from_id(first)?;
    let rest = &args[1..];

    match (section, rest.first().map(String::as_str)) {
        (s, None) => Ok(Command::Show(s)),
        (Section::Dashboard, Some("list")) => Ok(Command::ListDeals),
        (Section::Dashboard, Some("add")) => match &rest[1..] {
            [client, amount, profit] => Ok(Command::AddDeal {
                client: client.clone(),
                amount: amount.clone(),
                profit: profit.clone(),
            }),
            _ => bail!("dashboard add takes <client> <amount> <profit>"),
        },
        (Section::Deals, Some("preview")) => Ok(Command::PreviewTrade(assignments(&rest[1..])?)),
        (Section::Deals, Some("add")) => Ok(Command::AddTrade(assignments(&rest[1..])?)),
        (Section::Deals, Some("edit")) => {
            let id = rest
                .get(1)
                .context("deals edit needs a record id")?
                .parse::<i64>()
                .context("record id must be an integer")?;
            Ok(Command::EditTrade(id, assignments(&rest[2..])?))
        }
        (s, Some(other)) => bail!("'{}' has no command '{}'\n\n{}", s, other, USAGE),
    }
}

fn assignments(args: &[String]) -> Result<Vec<(FormField, String)>> {
    args.iter()
        .map(|arg| {
            let (name, value) = arg
                .split_once('=')
                .with_context(|| format!("expected field=value, got '{arg}'"))?;
            let field = FormField::from_name(name)
                .with_context(|| format!("unknown trading deal field '{name}'"))?;
            Ok((field, value.to_string()))
        })
        .collect()
}

fn fill(shell: &mut Shell, values: Vec<(FormField, String)>) -> Result<()> {
    for (field, value) in values {
        shell.trading_mut().set_field(field, &value)?;
    }
    Ok(())
}

/// Carry out one command and return what should be printed.
pub async fn run(shell: &mut Shell, command: Command) -> Result<String> {
    match command {
        Command::Show(section) => {
            shell.select(section);
            shell.enter().await;
            Ok(shell.render())
        }
        Command::ListDeals => {
            shell.select(Section::Dashboard);
            shell.enter().await;
            let listing = report::render_deal_list(shell.dashboard().deals());
            Ok(format!("{}\n\n{}", shell.header(), listing))
        }
        Command::AddDeal {
            client,
            amount,
            profit,
        } => {
            shell.select(Section::Dashboard);
            shell.enter().await;
            let form = &mut shell.dashboard_mut().form;
            form.set(DealField::Client, &client);
            form.set(DealField::Amount, &amount);
            form.set(DealField::Profit, &profit);
            shell.dashboard_mut().add_deal().await?;
            Ok(shell.render())
        }
        Command::PreviewTrade(values) => {
            shell.trading_mut().open_create();
            fill(shell, values)?;
            Ok(table::render_preview(shell.trading().form()))
        }
        Command::AddTrade(values) => {
            shell.select(Section::Deals);
            shell.enter().await;
            shell.trading_mut().open_create();
            fill(shell, values)?;
            shell.trading_mut().submit().await?;
            Ok(shell.render())
        }
        Command::EditTrade(id, values) => {
            shell.select(Section::Deals);
            shell.enter().await;
            shell.trading_mut().edit(id)?;
            fill(shell, values)?;
            shell.trading_mut().submit().await?;
            Ok(shell.render())
        }
    }
}
