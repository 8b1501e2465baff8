//! Interactive conversion session
//!
//! Each iteration prompts for an amount, a base currency and a target
//! currency, then resolves the rate, converts, reports the result and
//! appends it to the output log:
//!
//! PromptAmount -> PromptBaseCurrency -> PromptTargetCurrency
//!     -> ResolveRate -> Convert -> LogAndReport -> PromptAmount
//!
//! The termination token (or end of input) at any prompt ends the session
//! without writing anything further.

use chrono::NaiveDate;
use std::io::{BufRead, Write};
use thiserror::Error;

use crate::convert::{convert, ConvertError};
use crate::output::{ConversionRecord, OutputError, OutputLog};
use crate::rates::RateSource;
use crate::resolver::{RateResolver, ResolveError};
use crate::validate::{is_termination, parse_amount, parse_currency_code, InputError};

const AMOUNT_PROMPT: &str = "Amount (e.g. 10.00): ";
const BASE_PROMPT: &str = "Base currency: ";
const TARGET_PROMPT: &str = "Target currency: ";

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The rate could not be resolved
    #[error("Failed to get exchange rate: {0}")]
    Resolve(#[from] ResolveError),

    /// The amount could not be converted
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The conversion could not be logged
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// How a session ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The termination token was entered
    Terminated,
    /// Input was closed
    EndOfInput,
}

/// Outcome of a single prompt
enum Prompted<T> {
    Value(T),
    Stop(SessionEnd),
}

/// A conversion session for one historical date
pub struct Session<S> {
    date: NaiveDate,
    resolver: RateResolver<S>,
    output_log: OutputLog,
}

impl<S: RateSource> Session<S> {
    pub fn new(date: NaiveDate, resolver: RateResolver<S>, output_log: OutputLog) -> Self {
        Self {
            date,
            resolver,
            output_log,
        }
    }

    /// Runs the prompt loop until termination, end of input or a fatal error
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionEnd, SessionError> {
        loop {
            let amount = match prompt(input, output, AMOUNT_PROMPT, parse_amount)? {
                Prompted::Value(amount) => amount,
                Prompted::Stop(end) => return Ok(end),
            };
            let base_currency = match prompt(input, output, BASE_PROMPT, parse_currency_code)? {
                Prompted::Value(code) => code,
                Prompted::Stop(end) => return Ok(end),
            };
            let target_currency =
                match prompt(input, output, TARGET_PROMPT, parse_currency_code)? {
                    Prompted::Value(code) => code,
                    Prompted::Stop(end) => return Ok(end),
                };

            let resolved = self
                .resolver
                .resolve(self.date, &base_currency, &target_currency)
                .await?;
            log::debug!(
                "Rate {}->{} = {} ({:?})",
                base_currency,
                target_currency,
                resolved.rate,
                resolved.origin
            );

            // An overflowing product is reported like bad input and re-prompted
            let target_amount = match convert(amount, resolved.rate) {
                Ok(target_amount) => target_amount,
                Err(ConvertError::Overflow) => {
                    writeln!(output, "{}", ConvertError::Overflow)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            writeln!(
                output,
                "{} {} is {} {}",
                amount, base_currency, target_amount, target_currency
            )?;
            output.flush()?;

            self.output_log.append(ConversionRecord {
                date: self.date,
                amount,
                base_currency,
                target_amount,
                target_currency,
            })?;
        }
    }
}

/// Reads lines until one parses or the session should stop
///
/// Rejected input prints the parser's message and re-prompts.
fn prompt<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    label: &str,
    parse: F,
) -> Result<Prompted<T>, SessionError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        write!(output, "{}", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Prompted::Stop(SessionEnd::EndOfInput));
        }
        if is_termination(&line) {
            return Ok(Prompted::Stop(SessionEnd::Terminated));
        }

        match parse(&line) {
            Ok(value) => return Ok(Prompted::Value(value)),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RateCache;
    use crate::rates::{HistoricalRates, RatesError};
    use crate::resolver::CacheGate;
    use rust_decimal_macros::dec;
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct FakeSource {
        calls: Cell<usize>,
    }

    impl RateSource for &FakeSource {
        async fn fetch_rates(
            &self,
            _date: NaiveDate,
            base_currency: &str,
        ) -> Result<HistoricalRates, RatesError> {
            self.calls.set(self.calls.get() + 1);
            let results = match base_currency {
                "USD" => BTreeMap::from([
                    ("EUR".to_string(), 1.2345),
                    ("GBP".to_string(), 0.79),
                    ("JPY".to_string(), 1000.0),
                ]),
                _ => BTreeMap::from([("USD".to_string(), 2.0)]),
            };
            Ok(HistoricalRates { results })
        }
    }

    struct Harness {
        temp_dir: TempDir,
        source: FakeSource,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                temp_dir: TempDir::new().expect("Failed to create temp directory"),
                source: FakeSource {
                    calls: Cell::new(0),
                },
            }
        }

        fn output_log(&self) -> OutputLog {
            OutputLog::with_path(self.temp_dir.path().join("output.json"))
        }

        async fn run(&self, script: &str) -> (Result<SessionEnd, SessionError>, String) {
            let cache = RateCache::with_path(self.temp_dir.path().join("rates.json"));
            let resolver = RateResolver::new(&self.source, cache, CacheGate::AfterFirstFetch);
            let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
            let mut session = Session::new(date, resolver, self.output_log());

            let mut input = Cursor::new(script.as_bytes().to_vec());
            let mut output = Vec::new();
            let result = session.run(&mut input, &mut output).await;
            (result, String::from_utf8(output).unwrap())
        }
    }

    #[tokio::test]
    async fn test_single_conversion_then_end() {
        let harness = Harness::new();
        let (result, out) = harness.run("10.00\nusd\neur\nEND\n").await;

        assert_eq!(result.unwrap(), SessionEnd::Terminated);
        assert!(out.contains("10.00 USD is 12.35 EUR"), "Output was: {}", out);

        let records = harness.output_log().load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, dec!(10.00));
        assert_eq!(records[0].base_currency, "USD");
        assert_eq!(records[0].target_amount, dec!(12.35));
        assert_eq!(records[0].target_currency, "EUR");
    }

    #[tokio::test]
    async fn test_invalid_input_reprompts() {
        let harness = Harness::new();
        let (result, out) = harness
            .run("10\n10.1\n10.00\nxyz\nusd\neur\nend\n")
            .await;

        assert_eq!(result.unwrap(), SessionEnd::Terminated);
        assert_eq!(out.matches("Please enter a valid amount").count(), 2);
        assert_eq!(out.matches("Please enter a valid currency code").count(), 1);
        assert!(out.contains("10.00 USD is 12.35 EUR"));
    }

    #[tokio::test]
    async fn test_termination_at_each_prompt_writes_nothing() {
        for script in ["END\n", "5.00\nEnd\n", "5.00\nUSD\neNd\n"] {
            let harness = Harness::new();
            let (result, out) = harness.run(script).await;

            assert_eq!(result.unwrap(), SessionEnd::Terminated);
            assert!(!out.contains(" is "), "No conversion expected: {}", out);
            assert!(!harness.output_log().path().exists());
            assert_eq!(harness.source.calls.get(), 0);
        }
    }

    #[tokio::test]
    async fn test_end_of_input_stops_session() {
        let harness = Harness::new();
        let (result, _out) = harness.run("10.00\nUSD\n").await;
        assert_eq!(result.unwrap(), SessionEnd::EndOfInput);
    }

    #[tokio::test]
    async fn test_loop_logs_each_conversion_in_order() {
        let harness = Harness::new();
        let (result, out) = harness
            .run("10.00\nUSD\nEUR\n20.00\nUSD\nGBP\n3.00\nEUR\nUSD\nEND\n")
            .await;

        assert_eq!(result.unwrap(), SessionEnd::Terminated);
        assert!(out.contains("20.00 USD is 15.80 GBP"));
        assert!(out.contains("3.00 EUR is 6.00 USD"));

        let records = harness.output_log().load().unwrap();
        let targets: Vec<_> = records.iter().map(|r| r.target_currency.as_str()).collect();
        assert_eq!(targets, vec!["EUR", "GBP", "USD"]);

        // USD->GBP is served from the cache filled by USD->EUR
        assert_eq!(harness.source.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_oversized_amount_reprompts() {
        let harness = Harness::new();
        let (result, out) = harness
            .run("792281625142643375935439503.36\n1.00\nUSD\nEUR\nEND\n")
            .await;

        assert_eq!(result.unwrap(), SessionEnd::Terminated);
        assert!(out.contains("Please enter an amount no larger than"));
        assert!(out.contains("1.00 USD is 1.23 EUR"), "Output was: {}", out);
    }

    #[tokio::test]
    async fn test_conversion_overflow_reprompts() {
        let harness = Harness::new();
        // 1e26 * 1000 exceeds the decimal range
        let (result, out) = harness
            .run("100000000000000000000000000.00\nUSD\nJPY\n2.00\nUSD\nJPY\nEND\n")
            .await;

        assert_eq!(result.unwrap(), SessionEnd::Terminated);
        assert!(out.contains("Converted amount is out of range"), "Output was: {}", out);
        assert!(out.contains("2.00 USD is 2000.00 JPY"), "Output was: {}", out);

        let records = harness.output_log().load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, dec!(2.00));
    }

    #[tokio::test]
    async fn test_output_log_failure_ends_session() {
        let harness = Harness::new();
        std::fs::write(harness.output_log().path(), "not json").unwrap();

        let (result, _out) = harness.run("10.00\nUSD\nEUR\nEND\n").await;

        assert!(matches!(result, Err(SessionError::Output(_))));
    }
}
