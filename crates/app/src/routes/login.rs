use crate::session::use_session;
use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use portal::signin::SIGN_IN_STEPS;
use portal::{SignInFlow, SignInProgress};
use shared_ui::{
    Avatar, AvatarSize, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Progress, Separator,
};

/// Pause between simulated provider steps. Cosmetic only, so native
/// builds skip it rather than blocking a thread.
async fn step_pause() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(portal::signin::STEP_DELAY_MS).await;
}

/// Full-screen login: a simulated provider hand-off followed by an
/// identity picker. Cancelling or navigating away stops the in-flight
/// sequence and the session stays signed out.
#[component]
pub fn LoginScreen() -> Element {
    let mut state = use_session();
    // None = idle, Some((percent, label)) = provider sequence running
    let mut progress = use_signal(|| Option::<(u8, &'static str)>::None);
    let mut picker_open = use_signal(|| false);
    // Handle to the running sequence, so Cancel (and a re-click on the
    // sign-in button) can stop it instead of letting it tick on.
    let mut flow_task = use_signal(|| Option::<Task>::None);

    let start_sign_in = move |_| {
        if let Some(task) = flow_task() {
            task.cancel();
        }
        progress.set(Some((0, SIGN_IN_STEPS[0])));
        picker_open.set(false);
        let task = spawn(async move {
            let mut flow = SignInFlow::new();
            loop {
                step_pause().await;
                match flow.advance() {
                    SignInProgress::InProgress { percent, label } => {
                        progress.set(Some((percent, label)));
                    }
                    SignInProgress::Complete => {
                        progress.set(Some((100, "Signed in")));
                        picker_open.set(true);
                        break;
                    }
                }
            }
            flow_task.set(None);
        });
        flow_task.set(Some(task));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    div { class: "login-brand",
                        Icon::<LdShield> { icon: LdShield, width: 36, height: 36 }
                    }
                    CardTitle { "TARCZA" }
                    CardDescription { "Employee portal of Energetyka S.A." }
                }
                CardContent {
                    if picker_open() {
                        IdentityPicker {
                            on_select: move |user: shared_types::User| {
                                state.sign_in(user);
                            },
                        }
                    } else if let Some((percent, label)) = progress() {
                        div { class: "login-progress",
                            Progress { percent }
                            p { class: "login-progress-label", "{label}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    if let Some(task) = flow_task() {
                                        task.cancel();
                                    }
                                    flow_task.set(None);
                                    progress.set(None);
                                    picker_open.set(false);
                                },
                                "Cancel"
                            }
                        }
                    } else {
                        div { class: "login-start",
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: start_sign_in,
                                "Sign in with Google Workspace"
                            }
                            p { class: "login-hint",
                                "Use your company account to access the portal."
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Post-authorization account chooser over the fixed identity directory.
#[component]
fn IdentityPicker(on_select: EventHandler<shared_types::User>) -> Element {
    rsx! {
        div { class: "identity-picker",
            p { class: "identity-picker-title", "Choose an account" }
            Separator {}
            for user in portal::directory::users() {
                button {
                    class: "identity-row",
                    onclick: {
                        let user = user.clone();
                        move |_| on_select.call(user.clone())
                    },
                    Avatar { token: user.avatar.clone(), size: AvatarSize::Medium }
                    span { class: "identity-row-text",
                        span { class: "identity-row-name", "{user.name}" }
                        span { class: "identity-row-meta",
                            "{user.role.label()} · {user.email}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cancel drops the in-flight sequence; clicking sign-in again must
    // start over at step zero rather than resume where the old one was.
    #[test]
    fn restarted_hand_off_begins_at_step_zero() {
        let mut abandoned = SignInFlow::new();
        abandoned.advance();
        abandoned.advance();
        drop(abandoned);

        let mut fresh = SignInFlow::new();
        assert_eq!(fresh.percent(), 0);
        match fresh.advance() {
            SignInProgress::InProgress { percent, label } => {
                assert_eq!(percent, 25);
                assert_eq!(label, SIGN_IN_STEPS[0]);
            }
            other => panic!("expected the first step, got {:?}", other),
        }
    }
}
