use contracts::system::auth::StoredSession;
use web_sys::window;

const SESSION_KEY: &str = "karam_admin_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in session to localStorage
pub fn save_session(session: &StoredSession) {
    if let Some(storage) = get_local_storage() {
        match serde_json::to_string(session) {
            Ok(raw) => {
                let _ = storage.set_item(SESSION_KEY, &raw);
            }
            Err(e) => log::error!("Failed to store session: {}", e),
        }
    }
}

/// Session from localStorage; unreadable entries count as signed out
pub fn get_session() -> Option<StoredSession> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn get_access_token() -> Option<String> {
    get_session().map(|s| s.access_token)
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
