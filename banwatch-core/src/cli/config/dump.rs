use crate::cli::ConfigArgs;
use crate::conf::load_config;
use serde::Serialize;

pub fn dump(args: &ConfigArgs, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref(), &args.overrides())?;

    if yaml {
        dump_yaml(&cfg)?;
    } else if json || !yaml {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
