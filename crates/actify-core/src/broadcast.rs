//! WhatsApp reminder composition for expiring assignments.
//!
//! Pure string templating: the composed text is wrapped into a `wa.me`
//! deep link with the message percent-encoded into the `text` query
//! parameter. No messaging protocol is involved; opening the link is the
//! operator's job.

use chrono::Datelike;
use url::Url;

use actify_model::{ActingAssignment, ActingStatus};

use crate::datetime::parse_sheet_date;

/// Base URL for the team broadcast deep link.
const WA_BROADCAST_URL: &str = "https://wa.me/";

/// Base URL for the single-recipient reminder deep link.
const WA_SEND_URL: &str = "https://api.whatsapp.com/send";

/// A composed reminder: plain text plus its deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    /// The human-readable message body.
    pub text: String,
    /// `wa.me` / `api.whatsapp.com` link carrying the encoded body.
    pub link: String,
}

/// Compose the HR team reminder for the expiring subset.
///
/// Lists `ExpiringSoon` assignments (and `Expired` ones when
/// `include_expired` is set) as numbered entries in sequence order.
/// Returns `None` when the subset is empty; there is nothing to send.
pub fn compose_team_reminder(
    assignments: &[ActingAssignment],
    include_expired: bool,
) -> Option<BroadcastMessage> {
    let subset: Vec<&ActingAssignment> = assignments
        .iter()
        .filter(|assignment| match assignment.status {
            ActingStatus::ExpiringSoon => true,
            ActingStatus::Expired => include_expired,
            ActingStatus::Active => false,
        })
        .collect();
    if subset.is_empty() {
        return None;
    }

    let mut text = String::from("*REMINDER: ACTIFY HR REPORT*\n");
    text.push_str(
        "Halo Tim HR, berikut daftar karyawan dengan masa Acting yang akan segera berakhir (Expiring Soon):\n\n",
    );
    for (index, assignment) in subset.iter().enumerate() {
        text.push_str(&format!("{}. *{}*\n", index + 1, assignment.person_name));
        text.push_str(&format!("   Dept: {}\n", assignment.department));
        text.push_str(&format!("   End Date: {}\n\n", assignment.end_date));
    }
    text.push_str("Mohon segera ditindaklanjuti. Terima kasih.");

    let link = deep_link(WA_BROADCAST_URL, &text);
    Some(BroadcastMessage { text, link })
}

/// Compose a reminder about a single assignment.
///
/// The end date is spelled out in Indonesian long form ("15 Juni 2024");
/// unparsable end dates fall back to the raw sheet text.
pub fn compose_single_reminder(assignment: &ActingAssignment) -> BroadcastMessage {
    let text = format!(
        "Halo Tim HR, reminder untuk masa Acting Karyawan: *{}* ({}) yang akan berakhir pada *{}*. Mohon segera diproses.",
        assignment.person_name,
        assignment.department,
        indonesian_date(&assignment.end_date)
    );
    let link = deep_link(WA_SEND_URL, &text);
    BroadcastMessage { text, link }
}

/// Indonesian month names, January first.
const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn indonesian_date(raw: &str) -> String {
    match parse_sheet_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            INDONESIAN_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

fn deep_link(base: &str, text: &str) -> String {
    // The bases are compile-time constants; parsing them cannot fail.
    let mut url = Url::parse(base).expect("static base url");
    url.query_pairs_mut().append_pair("text", text);
    url.into()
}
