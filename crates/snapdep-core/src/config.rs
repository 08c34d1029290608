//! On-disk locations used by the library.

use serde::{Serialize, Deserialize};

/// Where snapdep keeps its cached data.
///
/// Algorithmic configuration (snapshot date, dependency fields, baseline,
/// allowed sources) is deliberately not part of this type; those are passed
/// per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	data_dir: std::path::PathBuf,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			data_dir: {
				#[cfg(target_os = "windows")]
				let path = std::path::PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

				#[cfg(not(target_os = "windows"))]
				let path = if let Ok(e) = std::env::var("XDG_DATA_HOME") {
					std::path::PathBuf::from(e)
				} else {
					std::path::PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".local/share")
				};

				let path = path.join("snapdep");
				std::fs::create_dir_all(&path).expect("failed to create data directory.");
				path
			},
		}
	}
}

impl Config {
	pub fn data_dir(&self) -> &std::path::PathBuf {
		&self.data_dir
	}

	/// Returns if the directory is valid or not.
	pub fn set_data_dir(&mut self, data_dir: std::path::PathBuf) -> bool {
		if data_dir.is_dir() {
			self.data_dir = data_dir;
			true
		} else {
			false
		}
	}

	fn config_file_path() -> std::path::PathBuf {
		#[cfg(target_os = "windows")]
		let path = std::path::PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

		#[cfg(not(target_os = "windows"))]
		let path = if let Ok(e) = std::env::var("XDG_CONFIG_HOME") {
			std::path::PathBuf::from(e)
		} else {
			std::path::PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".config")
		};

		path.join("snapdep").join("config.json")
	}

	pub fn load_from_disk() -> crate::Result<Self> {
		let data = std::fs::read(Self::config_file_path())?;
		Ok(serde_json::from_slice::<Self>(&data)?)
	}

	pub fn save_to_disk(&self) -> crate::Result<()> {
		let path = Self::config_file_path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
		Ok(())
	}
}
