use std::collections::HashMap;

use tabled::Table;

use crate::{
    config::Config,
    error,
    management::{self, Stores},
    types::{SummaryTableRow, UserTableRow},
    warning,
};

pub async fn users(config: Config) {
    let stores = Stores::open(&config);

    let mut users = match stores.users.users().await {
        Ok(users) => users,
        Err(e) => error!("Failed to load users. Err: {}", e),
    };
    if users.is_empty() {
        warning!("Nobody has logged in yet");
        return;
    }

    let names: HashMap<_, _> = match stores.summaries.summaries().await {
        Ok(summaries) => summaries.into_iter().map(|s| (s.id, s.name)).collect(),
        Err(e) => {
            warning!("Failed to load summaries. Err: {}", e);
            HashMap::new()
        }
    };

    users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));

    let rows: Vec<UserTableRow> = users
        .into_iter()
        .map(|u| UserTableRow {
            obscurity: u
                .stats
                .obscurity
                .map(|o| format!("{:.2}", o))
                .unwrap_or_else(|| "-".to_string()),
            summary: u
                .summary
                .and_then(|id| names.get(&id))
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "-".to_string()),
            updated: u.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            username: u.username,
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn summaries(config: Config) {
    let stores = Stores::open(&config);

    if let Err(e) = management::seed_summaries(stores.summaries.as_ref()).await {
        error!("Failed to seed summaries. Err: {}", e);
    }

    let mut summaries = match stores.summaries.summaries().await {
        Ok(summaries) => summaries,
        Err(e) => error!("Failed to load summaries. Err: {}", e),
    };
    summaries.sort_by_key(|s| s.name.as_str());

    let rows: Vec<SummaryTableRow> = summaries
        .into_iter()
        .map(|s| SummaryTableRow {
            name: s.name.to_string(),
            text: s.text,
        })
        .collect();

    println!("{}", Table::new(rows));
}
