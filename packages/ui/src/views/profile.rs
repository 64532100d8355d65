use dioxus::prelude::*;
use store::User;

use crate::format::format_vnd;
use crate::header::avatar_src;
use crate::notice::{Notice, NoticeLine};
use crate::profile::{apply_profile_update, image_data_url};
use crate::session::{
    expire_if_unauthorized, logout, make_api, session_store, use_auth_modal, use_config,
    use_session,
};

/// Account details plus the name/avatar form.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();

    match session().user {
        Some(user) => rsx! {
            ProfileForm { user }
        },
        None => rsx! {
            section {
                class: "view-page view-page--narrow",
                p { class: "view-hint", "Please log in to see your profile." }
            }
        },
    }
}

#[component]
fn ProfileForm(user: User) -> Element {
    let session = use_session();
    let modal = use_auth_modal();
    let config = use_config();
    let mut name = use_signal(|| user.name.clone());
    let mut preview = use_signal(|| user.avatar.clone());
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut saving = use_signal(|| false);

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                let mime = file.content_type();
                preview.set(Some(image_data_url(mime.as_deref(), &bytes)));
            }
            Err(e) => {
                tracing::warn!("Could not read avatar file: {}", e);
                notice.set(Some(Notice::error("Could not read the image file.")));
            }
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            notice.set(None);
            let api = make_api(&config.peek());
            match api.update_profile(&name(), preview()).await {
                Ok(update) => {
                    let mut session = session;
                    if let Some(user) = session.write().user.as_mut() {
                        apply_profile_update(user, update, &session_store());
                    }
                    tracing::info!("Profile updated");
                    notice.set(Some(Notice::success("Profile updated.")));
                }
                Err(e) => {
                    tracing::warn!("Profile update failed: {}", e);
                    if expire_if_unauthorized(&e, session, modal) {
                        saving.set(false);
                        return;
                    }
                    notice.set(Some(Notice::error(
                        e.user_message("Update failed. Please try again."),
                    )));
                }
            }
            saving.set(false);
        });
    };

    let shown_avatar = match preview() {
        Some(url) if !url.is_empty() => url,
        _ => avatar_src(&user),
    };

    rsx! {
        section {
            class: "view-page view-page--narrow",
            h1 { class: "view-title", "Profile" }
            form {
                class: "profile-form",
                onsubmit: handle_save,
                div {
                    class: "profile-form__avatar",
                    img { class: "avatar avatar--large", src: "{shown_avatar}", alt: "avatar" }
                    label {
                        class: "btn btn--outline",
                        r#for: "avatar-upload",
                        "Change avatar"
                    }
                    input {
                        id: "avatar-upload",
                        class: "visually-hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                }
                dl {
                    class: "profile-form__details",
                    dt { "E-mail" }
                    dd { "{user.email}" }
                    dt { "Balance" }
                    dd { "{format_vnd(user.balance)}" }
                    dt { "Role" }
                    dd { "{user.role.label()}" }
                }
                label { r#for: "profile-name", "Display name" }
                input {
                    id: "profile-name",
                    r#type: "text",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save name & avatar" }
                }
                NoticeLine { notice: notice() }
            }
            button {
                class: "btn btn--link",
                onclick: move |_| logout(session, modal),
                "Log out"
            }
        }
    }
}
