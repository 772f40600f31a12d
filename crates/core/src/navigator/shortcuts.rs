//! Fixed site destinations and project-id extraction.

use url::Url;

use crate::config::DEFAULT_START_URL;
use crate::error::{Error, Result};

/// Destinations the shell's menus jump to.
///
/// Some destinations are scoped to the project open in the current URL;
/// resolving those without one fails with [`Error::NoActiveProject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
	MyProjects,
	SearchProjects,
	Analytics,
	ProjectSettings,
	EditorSettings,
	SecuritySettings,
	Team,
	ApiDocs,
}

impl Shortcut {
	/// All destinations, in menu order.
	pub const ALL: [Shortcut; 8] = [
		Shortcut::MyProjects,
		Shortcut::SearchProjects,
		Shortcut::Analytics,
		Shortcut::ProjectSettings,
		Shortcut::EditorSettings,
		Shortcut::SecuritySettings,
		Shortcut::Team,
		Shortcut::ApiDocs,
	];

	/// Whether resolving needs a project id from the current URL.
	pub fn requires_project(self) -> bool {
		matches!(self, Shortcut::Analytics | Shortcut::ProjectSettings)
	}

	/// Builds the absolute destination URL.
	///
	/// `current_url` is only consulted for project-scoped destinations.
	pub fn resolve(self, current_url: &str) -> Result<String> {
		let url = match self {
			Shortcut::MyProjects => format!("{DEFAULT_START_URL}/projects/me"),
			Shortcut::SearchProjects => format!("{DEFAULT_START_URL}/projects"),
			Shortcut::Analytics => {
				let id = require_project_id(current_url)?;
				format!("{DEFAULT_START_URL}/project/{id}/analytics")
			}
			Shortcut::ProjectSettings => {
				let id = require_project_id(current_url)?;
				format!("{DEFAULT_START_URL}/project/{id}/settings")
			}
			Shortcut::EditorSettings => format!("{DEFAULT_START_URL}/settings/editor"),
			Shortcut::SecuritySettings => format!("{DEFAULT_START_URL}/settings/security"),
			Shortcut::Team => format!("{DEFAULT_START_URL}/team"),
			Shortcut::ApiDocs => format!("{DEFAULT_START_URL}/docs/api"),
		};
		Ok(url)
	}
}

impl std::fmt::Display for Shortcut {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			Shortcut::MyProjects => "My Projects",
			Shortcut::SearchProjects => "Search Projects",
			Shortcut::Analytics => "Analytics",
			Shortcut::ProjectSettings => "Project Settings",
			Shortcut::EditorSettings => "Editor Settings",
			Shortcut::SecuritySettings => "Security Settings",
			Shortcut::Team => "Team Management",
			Shortcut::ApiDocs => "API Documentation",
		};
		f.write_str(label)
	}
}

/// Extracts the project id from a URL's path, the segment right after
/// `project`.
///
/// Query and fragment never leak into the id. Returns `None` for URLs that
/// do not parse or carry no project segment.
pub fn project_id(url: &str) -> Option<String> {
	let parsed = Url::parse(url).ok()?;
	let mut segments = parsed.path_segments()?;
	while let Some(segment) = segments.next() {
		if segment == "project" {
			return segments
				.next()
				.filter(|id| !id.is_empty())
				.map(str::to_string);
		}
	}
	None
}

fn require_project_id(current_url: &str) -> Result<String> {
	project_id(current_url).ok_or(Error::NoActiveProject)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn project_id_takes_the_segment_after_project() {
		assert_eq!(
			project_id("https://websim.ai/project/abc/edit"),
			Some("abc".to_string())
		);
		assert_eq!(
			project_id("https://websim.ai/project/abc"),
			Some("abc".to_string())
		);
	}

	#[test]
	fn project_id_ignores_query_and_fragment() {
		assert_eq!(
			project_id("https://websim.ai/project/abc?plugin=@a/b#top"),
			Some("abc".to_string())
		);
	}

	#[test]
	fn project_id_absent_outside_projects() {
		assert_eq!(project_id("https://websim.ai"), None);
		assert_eq!(project_id("https://websim.ai/projects/me"), None);
		assert_eq!(project_id("https://websim.ai/project/"), None);
		assert_eq!(project_id("not a url"), None);
	}

	#[test]
	fn fixed_shortcuts_resolve_anywhere() {
		assert_eq!(
			Shortcut::MyProjects.resolve("").unwrap(),
			"https://websim.ai/projects/me"
		);
		assert_eq!(
			Shortcut::Team.resolve("").unwrap(),
			"https://websim.ai/team"
		);
		assert_eq!(
			Shortcut::ApiDocs.resolve("").unwrap(),
			"https://websim.ai/docs/api"
		);
		assert_eq!(
			Shortcut::EditorSettings.resolve("").unwrap(),
			"https://websim.ai/settings/editor"
		);
		assert_eq!(
			Shortcut::SecuritySettings.resolve("").unwrap(),
			"https://websim.ai/settings/security"
		);
		assert_eq!(
			Shortcut::SearchProjects.resolve("").unwrap(),
			"https://websim.ai/projects"
		);
	}

	#[test]
	fn project_shortcuts_resolve_against_the_open_project() {
		let current = "https://websim.ai/project/abc/edit";
		assert_eq!(
			Shortcut::Analytics.resolve(current).unwrap(),
			"https://websim.ai/project/abc/analytics"
		);
		assert_eq!(
			Shortcut::ProjectSettings.resolve(current).unwrap(),
			"https://websim.ai/project/abc/settings"
		);
	}

	#[test]
	fn project_shortcuts_fail_without_a_project() {
		let err = Shortcut::Analytics.resolve("https://websim.ai").unwrap_err();
		assert!(matches!(err, Error::NoActiveProject));
	}

	#[test]
	fn scoping_matches_resolution_requirements() {
		for shortcut in Shortcut::ALL {
			let outcome = shortcut.resolve("https://websim.ai");
			assert_eq!(shortcut.requires_project(), outcome.is_err());
		}
	}
}
