use std::fmt::Write as _;

use crate::{
    advisory::AdvisoryContext,
    core::locale::{format_quantity, format_rupiah},
};

const INSTRUCTIONS: &str = "\
Give a short, sharp and professional analysis in the style of a large company report.
If advice is requested, focus on cost efficiency, risk management or scheduling.
Use formal corporate language.
Do not overuse bold or italic markdown, plain clean text is enough.";

/// Prompt sent to the text endpoint for one question.
pub fn build_prompt(context: &AdvisoryContext, query: &str) -> String {
    let mut prompt = String::from(
        "You are an expert AI senior consultant in construction management.\n\nCurrent project data:\n",
    );
    for p in &context.projects {
        let _ = writeln!(
            prompt,
            "- {} ({}): Budget {}, Spent {}, Progress {}%",
            p.name,
            p.status,
            format_rupiah(p.budget),
            format_rupiah(p.spent),
            p.progress
        );
    }
    prompt.push_str("\nCurrent material data:\n");
    for m in &context.materials {
        let _ = writeln!(
            prompt,
            "- {}: Stock {} {} @ {}",
            m.name,
            format_quantity(m.quantity),
            m.unit,
            format_rupiah(m.unit_price)
        );
    }
    let _ = writeln!(prompt, "\nUser question: \"{}\"\n", query);
    prompt.push_str(INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Material, NewProject, ProjectStatus};
    use time::macros::date;

    #[test]
    fn prompt_lists_every_record_and_the_query() {
        let context = AdvisoryContext {
            projects: vec![
                NewProject {
                    name: "Tower A".into(),
                    budget: 1_000_000.0,
                    spent: 250_000.0,
                    progress: 25,
                    status: ProjectStatus::Ongoing,
                    ..Default::default()
                }
                .into_project("PRJ-1".into()),
            ],
            materials: vec![Material {
                id: "MAT-1".into(),
                name: "Semen".into(),
                category: "Bahan".into(),
                quantity: 1200.0,
                unit: "sak".into(),
                unit_price: 65_000.0,
                last_updated: date!(2026 - 01 - 01),
            }],
        };
        let prompt = build_prompt(&context, "Is the budget safe?");
        assert!(prompt.contains("- Tower A (Ongoing): Budget Rp 1.000.000, Spent Rp 250.000, Progress 25%"));
        assert!(prompt.contains("- Semen: Stock 1.200 sak @ Rp 65.000"));
        assert!(prompt.contains("User question: \"Is the budget safe?\""));
    }

    #[test]
    fn empty_query_still_builds_a_prompt() {
        let prompt = build_prompt(&AdvisoryContext::default(), "");
        assert!(prompt.contains("User question: \"\""));
        assert!(prompt.ends_with("plain clean text is enough."));
    }
}
