//! Subcommand implementations: each is a full load, act, render cycle.

use std::path::Path;

use anyhow::{Context, Result, bail};

use roster_core::DatasetStore;
use roster_model::{Row, Value};

use crate::cli::{AddArgs, CleanArgs, DeleteArgs, ProfileArgs, ShowArgs, UpdateArgs};
use crate::summary::{print_profile, print_table};

fn open_store(data_dir: &Path, file: &Path) -> Result<DatasetStore> {
    let mut store = DatasetStore::with_data_dir(data_dir);
    store
        .load(file)
        .with_context(|| format!("load {}", file.display()))?;
    Ok(store)
}

pub fn run_show(data_dir: &Path, args: &ShowArgs) -> Result<()> {
    let store = open_store(data_dir, &args.file)?;
    print_table(store.table(), args.limit);
    Ok(())
}

pub fn run_profile(data_dir: &Path, args: &ProfileArgs) -> Result<()> {
    let store = open_store(data_dir, &args.file)?;
    print_profile(store.table());
    Ok(())
}

pub fn run_add(data_dir: &Path, args: &AddArgs) -> Result<()> {
    let row = parse_set_pairs(&args.set)?;
    let mut store = open_store(data_dir, &args.file)?;
    let saved = store.add_row(row)?;
    println!(
        "Added row {} and saved {}",
        store.table().row_count() - 1,
        saved.display()
    );
    Ok(())
}

pub fn run_update(data_dir: &Path, args: &UpdateArgs) -> Result<()> {
    let patch = parse_set_pairs(&args.set)?;
    let mut store = open_store(data_dir, &args.file)?;
    let saved = store.update_row(args.index, patch)?;
    println!("Updated row {} and saved {}", args.index, saved.display());
    Ok(())
}

pub fn run_delete(data_dir: &Path, args: &DeleteArgs) -> Result<()> {
    let mut store = open_store(data_dir, &args.file)?;
    let saved = store.delete_row(args.index)?;
    println!(
        "Deleted row {}; {} rows remain, saved {}",
        args.index,
        store.table().row_count(),
        saved.display()
    );
    Ok(())
}

pub fn run_clean(data_dir: &Path, args: &CleanArgs) -> Result<()> {
    let mut store = open_store(data_dir, &args.file)?;
    let before = store.table().row_count();
    let saved = store.clean()?;
    println!(
        "Cleaned {} rows down to {} and saved {}",
        before,
        store.table().row_count(),
        saved.display()
    );
    Ok(())
}

/// Build a candidate row from `COLUMN=VALUE` pairs; values go through the
/// value parser, so an empty value submits an absent cell.
fn parse_set_pairs(pairs: &[String]) -> Result<Row> {
    let mut row = Row::new();
    for pair in pairs {
        let Some((column, raw)) = pair.split_once('=') else {
            bail!("--set expects COLUMN=VALUE, got '{pair}'");
        };
        let column = column.trim();
        if column.is_empty() {
            bail!("--set expects a column name, got '{pair}'");
        }
        row.insert(column.to_string(), Value::parse(raw));
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|pair| (*pair).to_string()).collect()
    }

    #[test]
    fn set_pairs_become_a_typed_row() {
        let row = parse_set_pairs(&pairs(&["Age=22", "Name=Braund", "Cabin="])).expect("parsed");
        assert_eq!(row.get("Age"), Some(&Value::Int(22)));
        assert_eq!(row.get("Name"), Some(&Value::Str("Braund".to_string())));
        assert_eq!(row.get("Cabin"), Some(&Value::Null));
    }

    #[test]
    fn set_pair_values_may_contain_equals_signs() {
        let row = parse_set_pairs(&pairs(&["Ticket=A=1"])).expect("parsed");
        assert_eq!(row.get("Ticket"), Some(&Value::Str("A=1".to_string())));
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_set_pairs(&pairs(&["Age"])).is_err());
        assert!(parse_set_pairs(&pairs(&["=22"])).is_err());
    }
}
