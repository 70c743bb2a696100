use super::calendar::{CalendarRange, CalendarSpan};
use super::formatter::{format_date, FormattedTask};
use super::mood::{Mood, MoodDescriptorItem, MoodEntry};
use super::task::{TaskItem, TaskStatus};
use crate::libs::messages::Message;
use crate::msg_print;
use chrono::{Datelike, NaiveDate};
use prettytable::{format, row, Cell, Row, Table};
use std::collections::HashMap;

const MOOD_BLOCK: &str = "██";
const EMPTY_BLOCK: &str = "░░";
const DAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub struct View {}

impl View {
    pub fn tasks(tasks: &[TaskItem]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "STATUS", "TAGS", "ADDED ON", "COMPLETED ON"]);
        for task in tasks {
            let formatted = FormattedTask::from(task);
            table.add_row(Row::new(vec![
                Cell::new(&formatted.id),
                Cell::new(&formatted.description),
                Cell::new(&formatted.status).style_spec(status_style(task.status)),
                Cell::new(&formatted.tags),
                Cell::new(&formatted.added_on),
                Cell::new(&formatted.completed_on),
            ]));
        }
        table.printstd();
    }

    pub fn config(items: &[(String, String)]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "VALUE"]);
        for (key, value) in items {
            table.add_row(row![key, value]);
        }
        table.printstd();
    }

    pub fn descriptors(items: &[MoodDescriptorItem]) {
        let mut table = Table::new();

        table.add_row(row!["MOOD", "DESCRIPTORS"]);
        for item in items {
            table.add_row(Row::new(vec![
                Cell::new(item.mood.display_name()).style_spec(mood_style(item.mood)),
                Cell::new(&item.descriptors.replace(',', ", ")),
            ]));
        }
        table.printstd();
    }

    pub fn mood_entries(entries: &[MoodEntry]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "MOOD", "DESCRIPTORS"]);
        for entry in entries {
            table.add_row(Row::new(vec![
                Cell::new(&format_date(&entry.date)),
                Cell::new(entry.mood.display_name()).style_spec(mood_style(entry.mood)),
                Cell::new(&entry.descriptors.replace(',', ", ")),
            ]));
        }
        table.printstd();
    }

    /// Week spans print a single row of days; longer spans print one grid per month.
    pub fn calendar(range: &CalendarRange, entries: &[MoodEntry]) {
        let by_date: HashMap<NaiveDate, Mood> = entries.iter().map(|e| (e.date, e.mood)).collect();

        msg_print!(format!("Mood Calendar: {}", range.title), true);

        if range.span == CalendarSpan::Week {
            let days = range.days();
            let mut table = clean_table();
            table.add_row(Row::new(
                days.iter().map(|d| Cell::new(&format!("{} {:>2}", DAY_HEADERS[d.weekday().num_days_from_monday() as usize], d.day()))).collect(),
            ));
            table.add_row(Row::new(days.iter().map(|d| day_cell(by_date.get(d).copied(), None)).collect()));
            table.printstd();
        } else {
            for month in range.months() {
                msg_print!(month.title);
                let mut table = clean_table();
                table.add_row(Row::new(DAY_HEADERS.iter().map(|h| Cell::new(h)).collect()));
                for week in &month.weeks {
                    table.add_row(Row::new(
                        week.iter()
                            .map(|slot| match slot {
                                Some(d) => day_cell(by_date.get(d).copied(), Some(d.day())),
                                None => Cell::new(""),
                            })
                            .collect(),
                    ));
                }
                table.printstd();
                println!();
            }
        }

        Self::legend();
    }

    fn legend() {
        let mut table = clean_table();
        let mut cells = vec![Cell::new(&Message::CalendarLegend.to_string())];
        for mood in Mood::ALL {
            cells.push(Cell::new(MOOD_BLOCK).style_spec(mood_style(mood)));
            cells.push(Cell::new(mood.display_name()));
        }
        table.add_row(Row::new(cells));
        table.printstd();
    }
}

fn clean_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table
}

fn day_cell(mood: Option<Mood>, day: Option<u32>) -> Cell {
    let label = day.map(|d| format!("{:>2} ", d)).unwrap_or_default();
    match mood {
        Some(mood) => Cell::new(&format!("{label}{MOOD_BLOCK}")).style_spec(mood_style(mood)),
        None => Cell::new(&format!("{label}{EMPTY_BLOCK}")),
    }
}

fn status_style(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Done => "Fg",
        TaskStatus::Later => "Fm",
        TaskStatus::Doing => "Fy",
    }
}

pub fn mood_style(mood: Mood) -> &'static str {
    match mood {
        Mood::VeryHappy => "Fg",
        Mood::Happy => "FG",
        Mood::Meh => "Fy",
        Mood::Down => "Fm",
        Mood::ExtraDown => "Fr",
    }
}
