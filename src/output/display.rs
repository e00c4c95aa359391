//! Display functions for command results

use super::formatters::{entropy_bar, guess_noun, percentage};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::Outcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, detail: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}{}",
        result.target.to_uppercase().bright_yellow().bold(),
        if result.random_target {
            " (random)".bright_black().to_string()
        } else {
            String::new()
        }
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {} → {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern,
            step.candidates_before,
            step.candidates_after
        );

        if detail {
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved => println!("{}", outcome_line(result).green().bold()),
        Outcome::Exhausted => println!("{}", outcome_line(result).red().bold()),
    }
}

/// Closing line of a solve report
fn outcome_line(result: &SolveResult) -> String {
    let guesses = result.guesses.len();
    match result.outcome {
        Outcome::Solved => format!("✅ Solved in {guesses} {}!", guess_noun(guesses)),
        Outcome::Exhausted => format!(
            "❌ Candidates exhausted after {guesses} {}: the word is not in the dictionary",
            guess_noun(guesses)
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:     {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:      {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:    {} candidates", result.max_partition);
    println!("   Opening score: {:.3}", result.opening_score);

    println!("\n🏆 {}", "Best in dictionary:".bright_cyan().bold());
    println!(
        "   Opening:       {} ({:.3})",
        result.best_opening.0.to_uppercase().bright_yellow(),
        result.best_opening.1
    );
    println!(
        "   Entropy:       {} ({:.3} bits)",
        result.best_entropy.0.to_uppercase().bright_yellow(),
        result.best_entropy.1
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        percentage(result.solved, result.total_words)
    );
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {}",
            result.exhausted.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = percentage(count, result.total_words);
        // Cast is safe: pct is in [0, 100]
        let bar_width = ((pct / 2.5) as usize).min(40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
        println!("   {guesses:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n🔥 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.hardest {
            println!("   {}  {guesses} guesses", word.to_uppercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GuessStep;
    use crate::core::Pattern;

    fn result(outcome: Outcome, guesses: usize) -> SolveResult {
        SolveResult {
            target: "crane".to_string(),
            outcome,
            guesses: (0..guesses)
                .map(|_| GuessStep {
                    word: "slate".to_string(),
                    pattern: Pattern::new(0),
                    candidates_before: 2,
                    candidates_after: 0,
                    entropy: 1.0,
                    expected_remaining: 1.0,
                })
                .collect(),
            random_target: false,
        }
    }

    #[test]
    fn outcome_line_pluralises_guesses() {
        assert_eq!(outcome_line(&result(Outcome::Solved, 1)), "✅ Solved in 1 guess!");
        assert_eq!(outcome_line(&result(Outcome::Solved, 3)), "✅ Solved in 3 guesses!");
    }

    #[test]
    fn exhausted_line_pluralises_guesses() {
        assert!(outcome_line(&result(Outcome::Exhausted, 1)).contains("after 1 guess:"));
        assert!(outcome_line(&result(Outcome::Exhausted, 2)).contains("after 2 guesses:"));
    }
}
