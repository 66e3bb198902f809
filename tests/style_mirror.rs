use anyhow::Result;
use facestyle::detector::{FaceDetector, RecordedDetector};
use facestyle::i18n::Locale;
use facestyle::matcher::{self, MAX_SCORE};
use facestyle::random::RngSource;
use facestyle::report;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("facestyle-vision/test_faces")
        .join(name)
}

#[test]
fn test_cat_fixture_matches_cat() -> Result<()> {
    let face = RecordedDetector::open(fixture("cat.json")).detect()?;

    let mut rng = RngSource::from_seed(Some(1));
    for _ in 0..50 {
        let result = matcher::classify_and_match(face.as_ref(), &mut rng)?;
        assert_eq!(result.archetype.name, "cat");
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.percent(), 95);
    }
    Ok(())
}

#[test]
fn test_dog_fixture_matches_dog() -> Result<()> {
    let face = RecordedDetector::open(fixture("dog.json")).detect()?;
    let result = matcher::classify_and_match(face.as_ref(), &mut || 0.5)?;
    println!("{} {} {:.1}", result.archetype.emoji, result.archetype.name, result.score);
    assert_eq!(result.archetype.name, "dog");
    Ok(())
}

#[test]
fn test_no_face_fixture() -> Result<()> {
    let face = RecordedDetector::open(fixture("no_face.json")).detect()?;
    assert!(face.is_none());
    let err = matcher::classify_and_match(face.as_ref(), &mut || 0.0).unwrap_err();
    assert_eq!(err.to_string(), "no face detected");
    Ok(())
}

#[test]
fn test_reports_never_have_empty_sections() -> Result<()> {
    for lang in ["ko", "en"] {
        let locale = Locale::load(lang, None)?;
        let mut rng = RngSource::from_seed(Some(2024));
        for _ in 0..200 {
            let sections = report::generate_report(&mut rng).sections(&locale);
            assert_eq!(sections.len(), 4);
            for section in &sections {
                assert!(!section.label.is_empty());
                assert!(!section.content.is_empty(), "{} empty in {}", section.key, lang);
                // every key resolved to a translation
                assert_ne!(section.label, section.key);
            }
        }
    }
    Ok(())
}

#[test]
fn test_same_draws_render_in_both_languages() -> Result<()> {
    let draws = report::generate_report(&mut || 0.0);
    let ko = draws.sections(&Locale::bundled("ko")?);
    let en = draws.sections(&Locale::bundled("en")?);
    assert_eq!(ko[1].label, "퍼스널 컬러 진단");
    assert_eq!(en[1].label, "Personal Color Diagnosis");
    assert_eq!(
        ko.iter().map(|s| s.key).collect::<Vec<_>>(),
        en.iter().map(|s| s.key).collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_locale_directory_with_missing_keys() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("facestyle-locales-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("ko.json"),
        r#"{"reportSectionOverallImpression": "인상"}"#,
    )?;

    // "fr" is absent from the directory, so the default language is used
    let locale = Locale::load("fr", Some(dir.as_path()))?;
    assert_eq!(locale.lang(), "ko");

    let sections = report::generate_report(&mut || 0.0).sections(&locale);
    assert_eq!(sections[0].label, "인상");
    // untranslated keys come back verbatim
    assert_eq!(sections[3].label, "reportSectionTodaysStylingTip");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_report_serializes_as_structured_json() -> Result<()> {
    let sections = report::generate_report(&mut || 0.0).sections(&Locale::bundled("en")?);
    let value = serde_json::to_value(&sections)?;
    assert_eq!(value[0]["key"], "reportSectionOverallImpression");
    assert_eq!(value[1]["content"]["kind"], "diagnosis");
    assert_eq!(value[1]["content"]["name"], "Spring Warm");
    assert_eq!(value[2]["content"]["items"].as_array().map(Vec::len), Some(3));
    Ok(())
}
