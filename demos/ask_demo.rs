//! Simple demonstration of the legal QA engine
//!
//! Answers the example questions from the web frontend against the
//! built-in knowledge base and prints the graded results.

use legal_qa_engine::config::ResponderConfig;
use legal_qa_engine::{KnowledgeStore, QueryResponder};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("⚖️  Legal QA Engine - Ask Demo");
    println!("==============================");

    let store = Arc::new(KnowledgeStore::builtin());
    let responder = QueryResponder::new(store.clone(), &ResponderConfig::default());

    println!("📚 Knowledge base ready with {} documents\n", store.len());

    let questions = [
        "Section 302 IPC punishment",
        "How to file FIR?",
        "Divorce under Hindu Marriage Act",
        "Cheque bounce Section 138",
        "Consumer rights protection",
    ];

    for question in questions {
        let result = responder.answer(question);

        println!("❓ {}", question);
        println!(
            "   grade {} | confidence {:.2} | accuracy {:.2} | {:.4}s",
            result.quality_grade,
            result.confidence,
            result.accuracy_estimate,
            result.response_time
        );
        let heading = result.response.lines().next().unwrap_or("");
        println!("   {}\n", heading);
    }

    println!("Done.");
    Ok(())
}
