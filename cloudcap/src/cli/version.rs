use std::env;

use comfy_table::{Cell, Table, presets::NOTHING};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct VersionInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub os: String,
    pub architecture: String,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: clap::crate_name!().to_string(),
            version: clap::crate_version!().to_string(),
            description: clap::crate_description!().to_string(),
            os: env::consts::OS.to_string(),
            architecture: env::consts::ARCH.to_string(),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        for (k, v) in [
            ("Name", &self.name),
            ("Version", &self.version),
            ("Description", &self.description),
            ("OS", &self.os),
            ("Architecture", &self.architecture),
        ] {
            table.add_row(vec![Cell::new(k), Cell::new(":"), Cell::new(v)]);
        }
        table
    }
}

pub fn run() {
    println!("{}", VersionInfo::current().table());
}
