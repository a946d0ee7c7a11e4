use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Folder scanned for .db files (the selectable databases).
    pub databases_dir: String,
    /// Currently selected database file.
    pub database: String,
    /// Default folder for export files.
    pub export_dir: String,
    /// Treat study mode as exact-match-only instead of applying the
    /// Morning/Hosted compatibility rule.
    #[serde(default)]
    pub strict_study_match: bool,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            databases_dir: dir.join("databases").to_string_lossy().to_string(),
            database: Self::default_database_file().to_string_lossy().to_string(),
            export_dir: dir.join("exports").to_string_lossy().to_string(),
            strict_study_match: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Return the default SQLite database path
    pub fn default_database_file() -> PathBuf {
        Self::config_dir().join("databases").join("rollcall.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Write the current configuration back to disk.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Resolve a database name against the databases folder. Accepts a
    /// bare name ("groupA"), a file name ("groupA.db"), or an absolute
    /// path, which is used as-is.
    pub fn resolve_database(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        let with_ext = if p.extension().is_some() {
            p.to_path_buf()
        } else {
            p.with_extension("db")
        };

        if with_ext.is_absolute() {
            with_ext
        } else {
            PathBuf::from(&self.databases_dir).join(with_ext)
        }
    }

    /// List .db files in the databases folder.
    pub fn list_databases(&self) -> AppResult<Vec<String>> {
        let dir = PathBuf::from(&self.databases_dir);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("db") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Initialize configuration, databases and exports folders.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();

        fs::create_dir_all(Self::config_dir())?;
        fs::create_dir_all(&config.databases_dir)?;
        fs::create_dir_all(&config.export_dir)?;

        if let Some(name) = custom_db {
            config.database = config.resolve_database(&name).to_string_lossy().to_string();
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Database:    {:?}", &config.database);

        Ok(config)
    }
}
