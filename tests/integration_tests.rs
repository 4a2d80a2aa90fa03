//! 통합 테스트 - 두 탐지 방식과 실행 흐름

use std::io::Write;
use std::path::Path;
use std::process::Command;

use langdetect::app::{run, AppError};
use langdetect::config::LangDetectConfig;
use langdetect::core::tokenizer::tokenize;
use langdetect::core::trigram::make_trigrams;
use langdetect::table::TableError;
use langdetect::{counting_detection, ngram_detection, LanguageTable};

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_counting_scenario() {
    let table = LanguageTable::from_json(r#"{"en": {"the": 1, "a": 1}, "fr": {"le": 1, "la": 1}}"#).unwrap();
    assert_eq!(counting_detection("the a cat", &table).unwrap(), "en");
}

#[test]
fn test_ngram_scenario() {
    let table = LanguageTable::from_json(r#"{"en": {"the": 1}, "fr": {"les": 1}}"#).unwrap();
    assert_eq!(make_trigrams("the"), vec!["the"]);
    assert_eq!(ngram_detection("the", &table).unwrap(), "en");
}

#[test]
fn test_short_text_ngram_first_language() {
    let table = LanguageTable::from_json(r#"{"fr": {"les": 1}, "en": {"the": 1}}"#).unwrap();
    assert!(make_trigrams("ab").is_empty());
    assert_eq!(ngram_detection("ab", &table).unwrap(), "fr");
}

#[test]
fn test_no_word_match_first_language() {
    let table = LanguageTable::from_json(r#"{"de": {"der": 1}, "en": {"the": 1}}"#).unwrap();
    assert_eq!(counting_detection("zzz yyy", &table).unwrap(), "de");
}

#[test]
fn test_methods_can_disagree() {
    let words = LanguageTable::from_json(r#"{"en": {"the": 1}, "fr": {"le": 1}}"#).unwrap();
    let trigrams = LanguageTable::from_json(r#"{"en": {"the": 1}, "fr": {"e l": 1, " le": 1}}"#).unwrap();

    let text = "the le";
    assert_eq!(counting_detection(text, &words).unwrap(), "en");
    assert_eq!(ngram_detection(text, &trigrams).unwrap(), "fr");
}

#[test]
fn test_tokenizer_and_trigram_properties() {
    for text in ["", "a", "ab  c", "Съешь же ещё этих мягких французских булок"] {
        assert_eq!(tokenize(text).join(" "), text);
        assert_eq!(make_trigrams(text).len(), text.chars().count().saturating_sub(2));
    }
}

#[test]
fn test_run_with_temp_files() {
    let text = write_temp("le chat et la souris");
    let words = write_temp(r#"{"en": {"the": 1, "and": 1}, "fr": {"le": 1, "la": 1, "et": 1}}"#);
    let trigrams = write_temp(r#"{"en": {"the": 1}, "fr": {"la ": 1, " la": 1}}"#);

    let config = LangDetectConfig::new()
        .with_count_table_path(words.path())
        .with_ngram_table_path(trigrams.path());

    let report = run(text.path(), &config).unwrap();
    assert_eq!(report.word_frequency.language, "fr");
    assert_eq!(report.word_frequency.count_for("fr"), Some(3));
    assert_eq!(report.ngram.language, "fr");
    assert_eq!(
        report.to_string(),
        "Result for the word-frequency method: fr\nResult for the n-gram method: fr"
    );
}

#[test]
fn test_run_crlf_input() {
    // \r\n은 \n으로 바뀌므로 "the\r" 토큰이 생기지 않음
    let text = write_temp("cat the\r\n");
    let words = write_temp(r#"{"xx": {"the\r": 1}, "en": {"the\n": 1}}"#);
    let trigrams = write_temp(r#"{"en": {"the": 1}}"#);

    let config = LangDetectConfig::new()
        .with_count_table_path(words.path())
        .with_ngram_table_path(trigrams.path());

    let report = run(text.path(), &config).unwrap();
    assert_eq!(report.word_frequency.language, "en");
    assert_eq!(report.word_frequency.count_for("xx"), Some(0));
}

#[test]
fn test_run_malformed_table() {
    let text = write_temp("the");
    let words = write_temp(r#"{"en": {"the": 1}"#);
    let trigrams = write_temp(r#"{"en": {"the": 1}}"#);

    let config = LangDetectConfig::new()
        .with_count_table_path(words.path())
        .with_ngram_table_path(trigrams.path());

    let result = run(text.path(), &config);
    assert!(matches!(
        result,
        Err(AppError::Table { source: TableError::ParseError(_), .. })
    ));
}

#[test]
fn test_run_empty_table() {
    let text = write_temp("the");
    let words = write_temp(r#"{"en": {"the": 1}}"#);
    let trigrams = write_temp("{}");

    let config = LangDetectConfig::new()
        .with_count_table_path(words.path())
        .with_ngram_table_path(trigrams.path());

    let result = run(text.path(), &config);
    assert!(matches!(result, Err(AppError::Table { source: TableError::Empty, .. })));
}

#[test]
fn test_run_non_numeric_scores() {
    // 점수 값은 쓰지 않으므로 숫자가 아니어도 키로 인정
    let text = write_temp("le chat");
    let words = write_temp(r#"{"en": {"the": "x"}, "fr": {"le": null}}"#);
    let trigrams = write_temp(r#"{"en": {"the": 1}, "fr": {"le ": "high"}}"#);

    let config = LangDetectConfig::new()
        .with_count_table_path(words.path())
        .with_ngram_table_path(trigrams.path());

    let report = run(text.path(), &config).unwrap();
    assert_eq!(report.word_frequency.language, "fr");
    assert_eq!(report.ngram.language, "fr");
}

#[test]
fn test_run_missing_table() {
    let text = write_temp("the");
    let config = LangDetectConfig::new()
        .with_count_table_path("/nonexistent/count_method.json")
        .with_ngram_table_path("/nonexistent/ngrams_method.json");

    let result = run(text.path(), &config);
    assert!(matches!(result, Err(AppError::Table { source: TableError::IoError(_), .. })));
}

#[test]
fn test_bundled_tables() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = LangDetectConfig::new()
        .with_count_table_path(manifest.join("data/count_method.json"))
        .with_ngram_table_path(manifest.join("data/ngrams_method.json"));

    let report = run(&manifest.join("data/sample_fr.txt"), &config).unwrap();
    assert_eq!(report.word_frequency.language, "french");
    assert_eq!(report.ngram.language, "french");
}

fn langdetect_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_langdetect"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("LANGDETECT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_output() {
    let output = langdetect_command().arg("data/sample_fr.txt").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Result for the word-frequency method: french\nResult for the n-gram method: french\n"
    );
}

#[test]
fn test_cli_missing_argument() {
    let output = langdetect_command().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("<TEXT_FILE>"));
}

#[test]
fn test_cli_extra_arguments_ignored() {
    let output = langdetect_command()
        .args(["data/sample_fr.txt", "extra", "--more"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Result for the word-frequency method: french\nResult for the n-gram method: french\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_cli_non_utf8_file_name() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = tempfile::tempdir().unwrap();
    let file_name = OsString::from_vec(b"sample_\xff.txt".to_vec());
    let text_path = dir.path().join(&file_name);
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    std::fs::copy(manifest.join("data/sample_fr.txt"), &text_path).unwrap();

    let output = langdetect_command().arg(&text_path).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Result for the word-frequency method: french\nResult for the n-gram method: french\n"
    );
}

#[test]
fn test_cli_missing_input_file() {
    let output = langdetect_command().arg("no_such_file.txt").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    // 에러는 한 번만 출력
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("no_such_file.txt").count(), 1, "stderr: {}", stderr);
}
