//! Analytics report export: a paginated document built from aggregated
//! event data. Formatting only; nothing here touches the server.

use std::io::{self, Write};

use crate::analytics::{tickets_sold, EventAnalytics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Heading(String),
    Text(String),
    Table(Table),
}

#[derive(Debug, Clone, Default)]
pub struct ReportPage {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<ReportPage>,
}

/// Builds the multi-section report: a summary table first, then one
/// detail page per event (ticket breakdown, attendee roster, feedback).
pub fn build_report(analytics: &[EventAnalytics]) -> ReportDocument {
    let mut pages = vec![summary_page(analytics)];
    pages.extend(analytics.iter().map(detail_page));
    ReportDocument {
        title: "Event Analytics Report".to_string(),
        pages,
    }
}

fn summary_page(analytics: &[EventAnalytics]) -> ReportPage {
    let rows = analytics
        .iter()
        .map(|entry| {
            vec![
                entry.event.title.clone(),
                entry.event.date.format("%Y-%m-%d").to_string(),
                format!("{:.1}", entry.average_rating),
                tickets_sold(&entry.event).to_string(),
            ]
        })
        .collect();

    ReportPage {
        sections: vec![Section::Table(Table {
            header: vec![
                "Event Title".to_string(),
                "Date".to_string(),
                "Average Rating".to_string(),
                "Tickets Sold".to_string(),
            ],
            rows,
        })],
    }
}

fn detail_page(entry: &EventAnalytics) -> ReportPage {
    let event = &entry.event;

    let ticket_rows = event
        .ticket_types
        .iter()
        .map(|ticket| {
            vec![
                ticket.label.clone(),
                format!("${}", ticket.price),
                ticket.quantity.to_string(),
                ticket.remaining_or_zero().to_string(),
            ]
        })
        .collect();

    let attendee_rows = entry
        .roster
        .iter()
        .map(|user| {
            vec![
                user.first_name.clone(),
                user.last_name.clone(),
                user.email.clone(),
            ]
        })
        .collect();

    let feedback_rows = event
        .feedback
        .iter()
        .map(|feedback| vec![feedback.rating.to_string(), feedback.comment.clone()])
        .collect();

    ReportPage {
        sections: vec![
            Section::Heading(format!("Event: {}", event.title)),
            Section::Text(format!("Date: {}", event.date.format("%Y-%m-%d"))),
            Section::Text(format!("Average Rating: {:.1}", entry.average_rating)),
            Section::Heading("Ticket Sales".to_string()),
            Section::Table(Table {
                header: vec![
                    "Type".to_string(),
                    "Price".to_string(),
                    "Tickets Remaining".to_string(),
                    "Sold".to_string(),
                ],
                rows: ticket_rows,
            }),
            Section::Heading("Attendees".to_string()),
            Section::Table(Table {
                header: vec![
                    "First Name".to_string(),
                    "Last Name".to_string(),
                    "Email".to_string(),
                ],
                rows: attendee_rows,
            }),
            Section::Heading("Feedback".to_string()),
            Section::Table(Table {
                header: vec!["Rating".to_string(), "Comment".to_string()],
                rows: feedback_rows,
            }),
        ],
    }
}

/// Writes the document as plain text, one delimited page at a time.
/// Rendering to PDF is a concern of the caller's export layer.
pub fn render_text<W: Write>(doc: &ReportDocument, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", doc.title)?;
    for (index, page) in doc.pages.iter().enumerate() {
        writeln!(out, "\n--- Page {} ---", index + 1)?;
        for section in &page.sections {
            match section {
                Section::Heading(text) => writeln!(out, "\n{text}")?,
                Section::Text(text) => writeln!(out, "{text}")?,
                Section::Table(table) => render_table(table, out)?,
            }
        }
    }
    Ok(())
}

fn render_table<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", table.header.join(" | "))?;
    for row in &table.rows {
        writeln!(out, "{}", row.join(" | "))?;
    }
    Ok(())
}
