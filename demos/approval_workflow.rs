//! Approval Workflow
//!
//! This example walks a program entity through the three-status approval
//! policy: pending, approved, rejected.
//!
//! Key concepts:
//! - An entity carrying a persisted status
//! - Rebuilding the engine transiently per operation
//! - Available actions exposed for serialization
//!
//! Run with: cargo run --example approval_workflow

use flowstate::workflow::{Action, Program};

fn main() {
    println!("=== Approval Workflow ===\n");

    let mut program = Program::new("Community Garden Grant");
    println!("Created program {:?} ({})", program.title, program.id);
    println!("Status: {:?}", program.status);
    println!("Available actions: {:?}\n", program.available_actions());

    println!("Approving...");
    let moved = program.transition(Action::Approve);
    println!("  moved: {moved}, status: {:?}", program.status);
    println!("  available actions: {:?}\n", program.available_actions());

    println!("Approving again (illegal from approved)...");
    let moved = program.transition(Action::Approve);
    println!("  moved: {moved}, status: {:?}\n", program.status);

    println!("Putting back on hold...");
    let moved = program.transition(Action::Hold);
    println!("  moved: {moved}, status: {:?}\n", program.status);

    println!("Rejecting...");
    let moved = program.transition(Action::Reject);
    println!("  moved: {moved}, status: {:?}\n", program.status);

    println!("Status log:");
    for entry in &program.logs {
        println!("  {:?} at {}", entry.status, entry.date);
    }

    let summary = serde_json::to_string_pretty(&program.summary()).unwrap();
    println!("\nAPI view:\n{summary}");

    println!("\n=== Example Complete ===");
}
