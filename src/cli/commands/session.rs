//! Session command handler

use crate::args::SessionSubcommand;
use degree_planner::core::session::Session;
use degree_planner::core::validation::is_valid_email;

/// Dispatch session subcommands
pub fn run(subcommand: SessionSubcommand, session: &mut Session) {
    match subcommand {
        SessionSubcommand::Login { email } => handle_login(session, &email),
        SessionSubcommand::Logout => handle_logout(session),
        SessionSubcommand::Show => handle_show(session),
    }
}

fn handle_login(session: &mut Session, email: &str) {
    if !is_valid_email(email) {
        eprintln!("✗ Please enter a valid email address.");
        return;
    }

    session.user = Some(email.to_string());
    session.timeline = None;
    if let Err(e) = session.save() {
        eprintln!("✗ Failed to save session: {e}");
        return;
    }
    println!("✓ Signed in as {email}");
}

fn handle_logout(session: &mut Session) {
    *session = Session::default();
    if let Err(e) = session.save() {
        eprintln!("✗ Failed to save session: {e}");
        return;
    }
    println!("✓ Session cleared");
}

fn handle_show(session: &Session) {
    match &session.user {
        Some(user) => println!("User: {user}"),
        None => println!("User: (none)"),
    }
    match &session.timeline {
        Some(timeline) => println!("Active timeline: {timeline}"),
        None => println!("Active timeline: (none)"),
    }
}
