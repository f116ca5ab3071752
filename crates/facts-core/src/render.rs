//! Each function writes finished lines to an [`io::Write`] sink so the
//! frontend can target a locked stdout and tests can target a buffer.
//! Headers are bolded through `colored`, which emits plain text whenever
//! stdout is not a terminal.

use std::io::{self, Write};

use colored::Colorize;

use crate::fact::{Fact, FactCollection};

/// Width of the separator rule around a full listing.
pub const RULE_WIDTH: usize = 80;

/// Write a single fact line: `#<n> ` when numbered, then icon and text.
pub fn write_fact<W: Write + ?Sized>(
    out: &mut W,
    fact: &Fact,
    number: Option<usize>,
) -> io::Result<()> {
    match number {
        Some(n) => writeln!(out, "#{n} {fact}"),
        None => writeln!(out, "{fact}"),
    }
}

/// Write one fact framed by the random-fact banner.
pub fn write_random<W: Write + ?Sized>(out: &mut W, fact: &Fact) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎲 {}", "Random Claude Code Fact:".bold())?;
    writeln!(out)?;
    write_fact(out, fact, None)?;
    writeln!(out)
}

/// Write every fact, numbered from 1, between two separator rules.
pub fn write_listing<W: Write + ?Sized>(out: &mut W, facts: &FactCollection) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let total = facts.len();

    writeln!(out)?;
    writeln!(
        out,
        "📚 {}",
        format!("All {total} Claude Code Facts:").bold()
    )?;
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    for (i, fact) in facts.iter().enumerate() {
        let number = i + 1;
        write_fact(out, fact, Some(number))?;
        if number < total {
            writeln!(out)?;
        }
    }
    writeln!(out, "{rule}")?;
    writeln!(out)
}

/// Write the usage screen for `program`.
pub fn write_help<W: Write + ?Sized>(out: &mut W, program: &str) -> io::Result<()> {
    write!(
        out,
        "
╔══════════════════════════════════════════════════════════════╗
║              Claude Code Facts - CLI Tool                    ║
╚══════════════════════════════════════════════════════════════╝

Usage:
    {program} [option]

Options:
    (no option)    Show a random Claude Code fact
    --all          Show all Claude Code facts
    --help, -h     Show this help message

Examples:
    {program}              # Random fact
    {program} --all        # All facts
    {program} --help       # This message


"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn two_facts() -> FactCollection {
        FactCollection::new(vec![Fact::new("🤖", "A"), Fact::new("🎉", "B")]).unwrap()
    }

    #[test]
    fn fact_without_number() {
        let out = render(|buf| write_fact(buf, &Fact::new("🤖", "A"), None));
        assert_eq!(out, "🤖 A\n");
    }

    #[test]
    fn fact_with_number() {
        let out = render(|buf| write_fact(buf, &Fact::new("🎉", "B"), Some(12)));
        assert_eq!(out, "#12 🎉 B\n");
    }

    #[test]
    fn random_banner_layout() {
        let out = render(|buf| write_random(buf, &Fact::new("🤖", "A")));
        assert_eq!(out, "\n🎲 Random Claude Code Fact:\n\n🤖 A\n\n");
    }

    #[test]
    fn listing_of_two_facts() {
        let facts = two_facts();
        let out = render(|buf| write_listing(buf, &facts));
        let rule = "=".repeat(80);
        let expected = format!(
            "\n📚 All 2 Claude Code Facts:\n\n{rule}\n#1 🤖 A\n\n#2 🎉 B\n{rule}\n\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn listing_of_one_fact_has_no_inner_blank_line() {
        let facts = FactCollection::new(vec![Fact::new("🧪", "solo")]).unwrap();
        let out = render(|buf| write_listing(buf, &facts));
        let rule = "=".repeat(80);
        assert!(out.contains(&format!("{rule}\n#1 🧪 solo\n{rule}\n")));
        assert!(out.contains("All 1 Claude Code Facts:"));
    }

    #[test]
    fn help_mentions_program_and_options() {
        let out = render(|buf| write_help(buf, "claude-facts"));
        assert!(out.contains("claude-facts [option]"));
        assert!(out.contains("--all"));
        assert!(out.contains("--help, -h"));
        assert!(out.contains("claude-facts --all"));
    }

    #[test]
    fn help_starts_and_ends_with_blank_lines() {
        let out = render(|buf| write_help(buf, "claude-facts"));
        assert!(out.starts_with("\n╔"));
        assert!(out.ends_with("# This message\n\n\n"));
    }

    mod listing_properties {
        use super::*;
        use proptest::prelude::*;

        fn fact_strategy() -> impl Strategy<Value = Fact> {
            ("[^\\s]{1,2}", "[a-zA-Z][a-zA-Z .,!']{0,40}")
                .prop_map(|(icon, text)| Fact::new(icon, text))
        }

        proptest! {
            #[test]
            fn labels_every_fact_in_order(facts in prop::collection::vec(fact_strategy(), 1..40)) {
                let collection = FactCollection::new(facts.clone()).unwrap();
                let out = render(|buf| write_listing(buf, &collection));

                let labeled: Vec<&str> = out.lines().filter(|l| l.starts_with('#')).collect();
                prop_assert_eq!(labeled.len(), facts.len());
                for (i, (line, fact)) in labeled.iter().zip(&facts).enumerate() {
                    let expected = format!("#{} {} {}", i + 1, fact.icon, fact.text);
                    prop_assert_eq!(*line, expected.as_str());
                }
                let header = format!("All {} Claude Code Facts:", facts.len());
                prop_assert!(out.contains(&header));
            }
        }
    }
}
