use std::fs;
use std::io::Cursor;

use aid_core::wizard::{Dialog, Screen, Wizard};
use image::{ImageFormat, Rgb, RgbImage};

use super::dispatch;
use super::finish_farewell;
use super::test_harness::{content, setup_view_harness, wizard_at_menu};

fn png_pixel() -> Vec<u8> {
    let pixel = RgbImage::from_pixel(1, 1, Rgb([180, 0, 0]));
    let mut out = Cursor::new(Vec::new());
    pixel.write_to(&mut out, ImageFormat::Png).expect("encode");
    out.into_inner()
}

fn render(wizard: Wizard) -> String {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(wizard, dir.path());
    harness.rebuild();
    harness.render()
}

fn at_step(topic: &str, steps_forward: usize) -> Wizard {
    let mut wizard = wizard_at_menu();
    wizard.select_topic(topic).expect("select");
    for _ in 0..steps_forward {
        wizard.go_next().expect("next");
    }
    wizard
}

#[test]
fn welcome_view_renders_name_prompt() {
    let html = render(Wizard::new(content()));
    assert!(
        html.contains("WELCOME TO THE FIRST AID EXPERT SYSTEM"),
        "missing title in {html}"
    );
    assert!(html.contains("What is your name?"), "missing prompt in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(!html.contains("modal-overlay"), "unexpected dialog in {html}");
}

#[test]
fn blank_name_shows_blocking_notice() {
    let mut wizard = Wizard::new(content());
    let _ = wizard.submit_name("   ");
    let html = render(wizard);
    assert!(html.contains("Please enter your name."), "missing notice in {html}");
    assert!(html.contains("WELCOME TO THE FIRST AID EXPERT SYSTEM"));
}

#[test]
fn menu_view_lists_topics_and_exit() {
    let html = render(wizard_at_menu());
    assert!(
        html.contains("Hello Amy, how can I assist you?"),
        "missing greeting in {html}"
    );
    for topic in ["Bleeding", "Burns", "Choking", "Fracture"] {
        assert!(html.contains(&format!(">{topic}<")), "missing {topic} in {html}");
    }
    assert!(html.contains("Exit System"), "missing exit in {html}");
    assert!(!html.contains("WELCOME TO"), "welcome not torn down in {html}");
}

#[test]
fn first_step_shows_next_without_previous() {
    let html = render(at_step("Choking", 0));
    assert!(html.contains("CHOKING — STEP 1"), "missing title in {html}");
    assert!(
        html.contains("If they can cough, encourage them to keep coughing."),
        "missing step text in {html}"
    );
    assert!(html.contains(">Next<"), "missing next in {html}");
    assert!(!html.contains(">Previous<"), "unexpected previous in {html}");
    assert!(!html.contains("Chatbot Summary"), "unexpected summary in {html}");
    assert!(html.contains("Back to Menu"));
}

#[test]
fn last_step_swaps_next_for_summary() {
    let html = render(at_step("Choking", 4));
    assert!(html.contains("CHOKING — STEP 5"), "missing title in {html}");
    assert!(html.contains("If person collapses, start CPR."));
    assert!(html.contains("Chatbot Summary"), "missing summary in {html}");
    assert!(html.contains(">Previous<"), "missing previous in {html}");
    assert!(!html.contains(">Next<"), "unexpected next in {html}");
}

#[test]
fn missing_burns_image_renders_placeholder() {
    for step in 0..6 {
        let html = render(at_step("Burns", step));
        assert!(html.contains("(Image not found)"), "missing placeholder in {html}");
        assert!(!html.contains("<img"), "unexpected image in {html}");
    }
}

#[test]
fn present_image_is_embedded_at_fixed_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("images")).unwrap();
    // Wrong extension on purpose: the format comes from the file contents.
    fs::write(dir.path().join("images/bleeding.jpg"), png_pixel()).unwrap();

    let mut harness = setup_view_harness(at_step("Bleeding", 0), dir.path());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("data:image/png;base64,"), "missing image in {html}");
    assert!(html.contains("width=\"400\""), "missing width in {html}");
    assert!(html.contains("height=\"250\""), "missing height in {html}");
    assert!(!html.contains("(Image not found)"));
}

#[test]
fn corrupt_image_renders_placeholder() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("images")).unwrap();
    fs::write(
        dir.path().join("images/burns.jpg"),
        [0xFF, 0xD8, 0xFF, 0x00, 0x01, 0x02],
    )
    .unwrap();

    let mut harness = setup_view_harness(at_step("Burns", 0), dir.path());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("(Image not found)"), "missing placeholder in {html}");
    assert!(!html.contains("<img"), "unexpected image in {html}");
}

#[test]
fn summary_view_renders_transcript() {
    let mut wizard = at_step("Choking", 4);
    wizard.go_to_summary().expect("summary");
    let html = render(wizard);

    assert!(html.contains("Choking — Chatbot Advice"), "missing title in {html}");
    assert!(
        html.contains("👋 Hello Amy, here is your quick summary for choking:"),
        "missing greeting in {html}"
    );
    assert_eq!(html.matches("• ").count(), 5, "wrong bullet count in {html}");
    assert!(html.contains("⚠ Emergency signs:"));
    assert!(html.contains("❗ Person becomes unconscious."));
    assert!(html.contains("❗ Choking does not clear."));
    assert!(!html.contains("STEP 5"), "step view not torn down in {html}");
}

#[test]
fn exit_request_shows_confirmation_over_menu() {
    let mut wizard = wizard_at_menu();
    wizard.request_exit().expect("exit");
    let html = render(wizard);
    assert!(
        html.contains("Are you sure you want to exit?"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Hello Amy"), "menu should stay behind dialog in {html}");
}

#[test]
fn confirmed_exit_shows_farewell_without_shutting_down_yet() {
    let mut wizard = wizard_at_menu();
    wizard.request_exit().expect("exit");
    wizard.confirm_exit().expect("confirm");

    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(wizard, dir.path());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Thank you for using the First Aid Expert System."),
        "missing farewell in {html}"
    );
    assert!(html.contains("Stay safe!"));
    assert!(!harness.app.shutdown_requested());
}

#[test]
fn submitting_name_replaces_welcome_with_menu() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(Wizard::new(content()), dir.path());
    harness.rebuild();

    harness.act(|wizard, _| dispatch(wizard, |state| state.submit_name("   ")));
    assert!(
        harness.render().contains("Please enter your name."),
        "blank name should raise the notice"
    );
    harness.act(|wizard, _| dispatch(wizard, Wizard::dismiss_notice));

    harness.act(|wizard, _| dispatch(wizard, |state| state.submit_name("  Amy ")));
    let html = harness.render();

    assert_eq!(harness.wizard().screen(), Screen::MainMenu);
    assert!(
        html.contains("Hello Amy, how can I assist you?"),
        "missing greeting in {html}"
    );
    assert!(!html.contains("WELCOME TO"), "welcome not torn down in {html}");
    assert!(!html.contains("modal-overlay"), "unexpected dialog in {html}");
}

#[test]
fn farewell_ok_shuts_the_app_down() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(wizard_at_menu(), dir.path());
    harness.rebuild();

    harness.act(|wizard, _| dispatch(wizard, Wizard::request_exit));
    harness.act(|wizard, _| dispatch(wizard, Wizard::confirm_exit));
    assert_eq!(
        harness.wizard().dialog(),
        Some(Dialog::Farewell)
    );
    assert!(!harness.app.shutdown_requested());

    harness.act(finish_farewell);

    assert!(harness.app.shutdown_requested());
    assert!(harness.wizard().is_terminated());
}

#[test]
fn declining_exit_keeps_the_app_running() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(wizard_at_menu(), dir.path());
    harness.rebuild();

    harness.act(|wizard, _| dispatch(wizard, Wizard::request_exit));
    harness.act(|wizard, _| dispatch(wizard, Wizard::decline_exit));
    let html = harness.render();

    assert!(!html.contains("modal-overlay"), "dialog left open in {html}");
    assert!(html.contains("Hello Amy"), "menu missing in {html}");
    assert!(!harness.app.shutdown_requested());
}
