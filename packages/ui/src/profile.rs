//! Profile editing helpers: avatar encoding and merging the update response.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use store::{KeyValueStore, ProfileUpdate, SessionStore, User};

/// Encode picked image bytes as a `data:` URL suitable for `img src` and for
/// the profile update body.
pub fn image_data_url(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Merge the fields returned by `PUT /api/user/me` into the session user and
/// persist the result.
pub fn apply_profile_update<S: KeyValueStore>(
    user: &mut User,
    update: ProfileUpdate,
    store: &SessionStore<S>,
) {
    user.merge(update);
    store.save_user(user);
}
