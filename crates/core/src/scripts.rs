//! Builders for the JavaScript the shell injects into pages.
//!
//! Interpolated values are serialized through serde_json, so arbitrary
//! owner/name/project strings land in the page as proper JS string
//! literals.

use crate::plugin::PluginRef;

/// Project flags the site stores under `project.lore` and toggles through
/// its `window.websim` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFeature {
	Database,
	Api,
	Multiplayer,
	Llm,
}

impl ProjectFeature {
	/// All toggleable features, in menu order.
	pub const ALL: [ProjectFeature; 4] = [
		ProjectFeature::Database,
		ProjectFeature::Api,
		ProjectFeature::Multiplayer,
		ProjectFeature::Llm,
	];

	/// The `project.lore` key this feature flips.
	pub fn flag(self) -> &'static str {
		match self {
			ProjectFeature::Database => "enableDatabase",
			ProjectFeature::Api => "enableApi",
			ProjectFeature::Multiplayer => "enableMultiplayer",
			ProjectFeature::Llm => "enableLLM",
		}
	}
}

impl std::fmt::Display for ProjectFeature {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			ProjectFeature::Database => "Database",
			ProjectFeature::Api => "API Access",
			ProjectFeature::Multiplayer => "Multiplayer",
			ProjectFeature::Llm => "LLM Features",
		};
		f.write_str(label)
	}
}

/// Transient feedback badge shown when a watched plugin is active.
///
/// Purple box pinned bottom-right, visible for 3 seconds, then a 1-second
/// fade before removal.
const BADGE_JS: &str = r#"
(() => {
    const div = document.createElement('div');
    div.style.position = 'fixed';
    div.style.bottom = '20px';
    div.style.right = '20px';
    div.style.backgroundColor = '#9C27B0';
    div.style.color = 'white';
    div.style.padding = '10px';
    div.style.borderRadius = '5px';
    div.style.zIndex = '9999';
    div.style.fontFamily = 'Arial, sans-serif';
    div.textContent = __LABEL__;

    document.body.appendChild(div);

    setTimeout(() => {
        div.style.transition = 'opacity 1s';
        div.style.opacity = '0';
        setTimeout(() => div.remove(), 1000);
    }, 3000);
})();
"#;

/// Opens the site's database page in a decorated companion window.
const DATABASE_PANEL_JS: &str = r#"
((projectId) => {
    if (!projectId) {
        projectId = document.querySelector('[data-project-id]')?.dataset.projectId;
    }

    const baseUrl = window.location.origin;
    const dbWindow = window.open(
        baseUrl + '/database' + (projectId ? '?project=' + projectId : ''),
        'WsimDatabase',
        'width=800,height=800,resizable=yes,scrollbars=yes,status=yes'
    );
    if (!dbWindow) {
        return;
    }

    dbWindow.addEventListener('DOMContentLoaded', () => {
        const style = dbWindow.document.createElement('style');
        style.textContent = `
            body { font-family: 'Segoe UI', sans-serif; }
            .websim-db-header {
                background: #4CAF50;
                color: white;
                padding: 10px;
                position: sticky;
                top: 0;
                z-index: 1000;
            }
            .websim-db-button {
                background: #4CAF50;
                color: white;
                border: none;
                padding: 8px 16px;
                border-radius: 4px;
                cursor: pointer;
                margin: 5px;
            }
            .websim-db-button:hover {
                background: #45a049;
            }
        `;
        dbWindow.document.head.appendChild(style);

        const header = dbWindow.document.createElement('div');
        header.className = 'websim-db-header';
        header.innerHTML = `
            <h2>WebSim Database</h2>
            <div>Project ID: ${projectId || 'None'}</div>
        `;
        dbWindow.document.body.insertBefore(header, dbWindow.document.body.firstChild);

        const syncButton = dbWindow.document.createElement('button');
        syncButton.className = 'websim-db-button';
        syncButton.textContent = 'Sync with Project';
        syncButton.onclick = () => dbWindow.location.reload();
        header.appendChild(syncButton);
    });
})(__PROJECT_ID__);
"#;

/// Flips a `project.lore` flag through the site API; resolves `true` on
/// success, `false` when the project or its lore is missing.
const TOGGLE_FEATURE_JS: &str = r#"
(async (projectId, feature) => {
    const project = await window.websim.getProject(projectId);
    if (project && project.lore) {
        project.lore[feature] = !project.lore[feature];
        await window.websim.updateProject(project);
        return true;
    }
    return false;
})(__PROJECT_ID__, __FEATURE__);
"#;

/// Badge script announcing `plugin` as `Plugin: <name> by <owner>`.
pub fn plugin_badge(plugin: &PluginRef) -> String {
	let label = format!("Plugin: {} by {}", plugin.name(), plugin.owner());
	BADGE_JS.replace("__LABEL__", &js_string(&label))
}

/// Database panel script, scoped to `project_id` when known.
///
/// Without an id the script falls back to the page's own
/// `data-project-id` marker.
pub fn database_panel(project_id: Option<&str>) -> String {
	DATABASE_PANEL_JS.replace("__PROJECT_ID__", &js_string(project_id.unwrap_or("")))
}

/// Feature-toggle script for `project_id`.
pub fn toggle_project_feature(project_id: &str, feature: ProjectFeature) -> String {
	TOGGLE_FEATURE_JS
		.replace("__PROJECT_ID__", &js_string(project_id))
		.replace("__FEATURE__", &js_string(feature.flag()))
}

/// Serializes `value` as a JS string literal, quotes included.
fn js_string(value: &str) -> String {
	serde_json::to_string(value).expect("strings are always serializable")
}
