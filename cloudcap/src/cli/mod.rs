pub mod bugreport;
pub mod dotenv;
pub mod error;
pub mod export;
pub mod output;
pub mod progress;
pub mod report;
pub mod version;

pub const BACKUP_SUBCOMMAND: &str = "backup";
pub const BACKUP_DESCRIPTION: &str = "Report cloud storage size of volumes backed up to the cloud";

pub const TIERING_SUBCOMMAND: &str = "tiering";
pub const TIERING_DESCRIPTION: &str = "Report cloud storage size of volumes tiered to the cloud";

pub const VERSION_SUBCOMMAND: &str = "version";
pub const VERSION_DESCRIPTION: &str = "Display the version and build information";

pub const BUGREPORT_SUBCOMMAND: &str = "bugreport";
pub const BUGREPORT_DESCRIPTION: &str = "Collect information about the system and the environment";

pub const USER_ENV: &str = "netapp_user";
pub const PASSWORD_ENV: &str = "netapp_pass";
