use std::io::Write;
use std::process::Command;

use chrono::{Days, Local};

const HEADER: &str = "Дата операции;Дата платежа;Номер карты;Статус;Сумма операции;Валюта операции;Сумма платежа;Валюта платежа;Кэшбэк;Категория;MCC;Описание;Бонусы";

fn statement(rows: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

fn row(days_ago: u64, card: &str, amount: &str, description: &str) -> String {
    let date = Local::now().date_naive().checked_sub_days(Days::new(days_ago)).unwrap();
    format!(
        "{} 10:00:00;{};{};OK;{};RUB;{};RUB;;Разное;5815;{};0,00",
        date.format("%d.%m.%Y"),
        date.format("%d.%m.%Y"),
        card,
        amount,
        amount,
        description
    )
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_recurrent-payments"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_invalid_amount_aborts_with_single_error() {
    let bad = row(3, "*1234", "-100,00", "Cafe").replacen(";-100,00;RUB;-100,00;", ";-100,00;RUB;сто;", 1);
    let file = statement(&[row(5, "*1234", "-100,00", "Cafe"), bad]);

    let output = run(&[file.path().to_str().unwrap()]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Import errors found:\n"));
    let errors: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("\tRow 2,"));
    assert!(!stdout.contains("Recurrent payments descriptions"));
}

#[test]
fn test_reports_recurrent_payments() {
    let file = statement(&[
        row(95, "*1234", "-299,00", "Yandex Plus"),
        row(65, "*1234", "-299,00", "Yandex Plus"),
        row(35, "*1234", "-299,00", "Yandex Plus"),
        row(5, "*1234", "-299,00", "Yandex Plus"),
        row(4, "*1234", "-150,00", "Gym Membership"),
        row(3, "*5678", "-799,00", "Netflix Monthly"),
        row(2, "*1234", "-450,00", "Cafe"),
        row(1, "*1234", "50000,00", "Salary"),
    ]);

    let output = run(&[file.path().to_str().unwrap(), "--card-last-digits", "1234"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Recurrent payments descriptions:");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Yandex Plus (total paid: 1196.00, last paid: "));
    assert!(lines[2].starts_with("Gym Membership (total paid: 150.00, "));
}

#[test]
fn test_inactive_payments_need_flag() {
    let file = statement(&[row(45, "*1234", "-1000,00", "Аренда")]);
    let path = file.path().to_str().unwrap();

    let active = run(&[path, "--sure-recurrent-payments-descriptions", "Аренда"]);
    assert_eq!(String::from_utf8(active.stdout).unwrap(), "Recurrent payments descriptions:\n");

    let all = run(&[path, "--sure-recurrent-payments-descriptions", "Аренда", "--include-inactive"]);
    assert!(String::from_utf8(all.stdout).unwrap().contains("Аренда (total paid: 1000.00"));
}

#[test]
fn test_missing_file_fails() {
    let output = run(&["/definitely/not/here.csv"]);
    assert!(!output.status.success());
}
