//! Bilingual rendering of resolution outcomes.
//!
//! Message selection is a pure function of `(outcome, locale)`; the
//! resolution logic itself never branches on locale.

use gazarch_core::Locale;

use crate::engine::Outcome;

/// Render an outcome as a user-facing message in the given locale.
#[must_use]
pub fn render(outcome: &Outcome<'_>, locale: Locale) -> String {
    let english = locale.is_english();
    match outcome {
        Outcome::Found(record) => match record.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => format!("{}\n{url}", record.title),
            _ if english => format!(
                "{}\n(⚠️ Google Maps link is missing in locations.yml — add the link and try again.)",
                record.title
            ),
            _ => format!(
                "{}\n(⚠️ Google Maps линк одоогоор locations.yml дээр байхгүй байна — линкээ нэмээд дахин туршаарай.)",
                record.title
            ),
        },
        Outcome::Unavailable => {
            if english {
                "Sorry, that building information is not available in this bot.".to_string()
            } else {
                "Уучлаарай, тэр байрны мэдээлэл энэ бот дээр байхгүй байна.".to_string()
            }
        }
        Outcome::NotFoundNumber => {
            if english {
                "Sorry, no location found for that number. Try searching by name.".to_string()
            } else {
                "Уучлаарай, тэр дугаартай байршил олдсонгүй. Дахиад нэрээр нь бичээд үзээрэй."
                    .to_string()
            }
        }
        Outcome::NotFoundName => {
            if english {
                "Sorry, I couldn't find that location 😅 Type “locations” to see the list."
                    .to_string()
            } else {
                "Уучлаарай, тэр байршлыг олсонгүй 😅 “байршлууд” гэж бичээд жагсаалтыг хараарай."
                    .to_string()
            }
        }
        Outcome::AskKind => {
            if english {
                "Please answer with “academic building” or “dormitory”.".to_string()
            } else {
                "“хичээлийн байр” эсвэл “дотуур байр” гэж хариулаарай 🙂".to_string()
            }
        }
        Outcome::Listing(titles) => {
            let header = if english {
                "Available locations:"
            } else {
                "Боломжтой байршлууд:"
            };
            let mut lines = Vec::with_capacity(titles.len() + 1);
            lines.push(header.to_string());
            lines.extend(titles.iter().map(|t| format!("• {t}")));
            lines.join("\n")
        }
    }
}
