use contracts::system::auth::StoredSession;
use web_sys::window;

const SESSION_KEY: &str = "erp_auth_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session and its tokens
pub fn save_session(session: &StoredSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if let Err(e) = storage.set_item(SESSION_KEY, &json) {
                log::warn!("failed to persist session: {:?}", e);
            }
        }
        Err(e) => log::error!("failed to serialize session: {}", e),
    }
}

/// Session persisted by a previous page load; unreadable entries count as absent
pub fn load_session() -> Option<StoredSession> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding unreadable stored session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        if let Err(e) = storage.remove_item(SESSION_KEY) {
            log::warn!("failed to clear stored session: {:?}", e);
        }
    }
}
