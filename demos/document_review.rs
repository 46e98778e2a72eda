//! Document Review State Machine
//!
//! This example builds a custom machine over a caller-defined state
//! alphabet, showing that the engine is domain-agnostic.
//!
//! Key concepts:
//! - Declaring states with the `state_enum!` macro
//! - Fluent machine construction
//! - Overlapping `from` sets evaluated per rule
//!
//! Run with: cargo run --example document_review

use flowstate::builder::StateMachineBuilder;
use flowstate::state_enum;

state_enum! {
    enum DocState {
        Draft,
        InReview,
        Published,
        Archived,
    }
}

fn main() {
    println!("=== Document Review State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial(DocState::Draft)
        .rule("submit", vec![DocState::Draft], DocState::InReview)
        .rule("request_changes", vec![DocState::InReview], DocState::Draft)
        .rule("publish", vec![DocState::InReview], DocState::Published)
        .rule(
            "archive",
            vec![DocState::Draft, DocState::InReview, DocState::Published],
            DocState::Archived,
        )
        .build()
        .unwrap();

    println!("Initial state: {:?}", machine.current_state());
    println!("Available: {:?}\n", machine.transitions());

    println!("Submitting for review...");
    machine.apply("submit");
    println!("  state: {:?}, available: {:?}\n", machine.current_state(), machine.transitions());

    println!("Reviewer requests changes...");
    machine.apply("request_changes");
    println!("  state: {:?}\n", machine.current_state());

    println!("Resubmitting and publishing...");
    machine.apply("submit");
    machine.apply("publish");
    println!("  state: {:?}, available: {:?}\n", machine.current_state(), machine.transitions());

    println!("Archiving...");
    machine.apply("archive");
    println!("  state: {:?}", machine.current_state());
    println!("  available: {:?} (archived is terminal-like)", machine.transitions());

    println!("\n=== Example Complete ===");
}
