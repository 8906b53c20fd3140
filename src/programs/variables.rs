//! Variable and data type showcases

use super::optional;
use crate::console::Console;
use crate::error::Result;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use std::mem::size_of;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Showcase {
    /// Integer, float and character variables, then reassignment
    #[default]
    Basic,
    /// A student profile card with derived values
    Profile,
    /// Every scalar type: sizes, ranges, conversions and formatting
    Tour,
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, showcase: Showcase) -> Result<()> {
    debug!(?showcase, "Running variables program");
    match showcase {
        Showcase::Basic => basic(console),
        Showcase::Profile => profile(console),
        Showcase::Tour => tour(console),
    }
}

fn basic<W: Write>(out: &mut W) -> Result<()> {
    let mut age: i32 = 20;
    let students: i32 = 25;
    let temperature: i32 = -5;

    let height: f32 = 5.8;
    let mut price: f32 = 19.99;
    let weight: f32 = 70.5;

    let mut grade = 'A';
    let initial = 'J';
    let symbol = '@';

    writeln!(out, "=== INTEGER VARIABLES ===")?;
    writeln!(out, "Age: {age} years")?;
    writeln!(out, "Number of students: {students}")?;
    writeln!(out, "Temperature: {temperature}°C")?;

    writeln!(out, "\n=== FLOAT VARIABLES ===")?;
    writeln!(out, "Height: {height:.1} meters")?;
    writeln!(out, "Price: ${price:.2}")?;
    writeln!(out, "Weight: {weight:.1} kg")?;

    writeln!(out, "\n=== CHARACTER VARIABLES ===")?;
    writeln!(out, "Grade: {grade}")?;
    writeln!(out, "Initial: {initial}")?;
    writeln!(out, "Symbol: {symbol}")?;

    writeln!(out, "\n=== CHANGING VALUES ===")?;
    age = 21;
    grade = 'A';
    price = 24.99;

    writeln!(out, "New age: {age} years")?;
    writeln!(out, "New grade: {grade}")?;
    writeln!(out, "New price: ${price:.2}")?;
    Ok(())
}

const CREDITS_TO_GRADUATE: i32 = 120;

fn profile<W: Write>(out: &mut W) -> Result<()> {
    let initial = 'S';
    let mut age: i32 = 19;
    let mut gpa: f32 = 3.75;
    let mut credits_completed: i32 = 45;
    let mut letter_grade = 'B';
    let starting_tuition: f32 = 5500.00;
    let mut tuition_owed = starting_tuition;

    writeln!(out, "╔═══════════════════════════════╗")?;
    writeln!(out, "║        STUDENT PROFILE        ║")?;
    writeln!(out, "╚═══════════════════════════════╝")?;
    writeln!(out, "\nPersonal Information:")?;
    writeln!(out, "  Initial: {initial}")?;
    writeln!(out, "  Age: {age} years old")?;

    writeln!(out, "\nAcademic Information:")?;
    writeln!(out, "  Current GPA: {gpa:.2}")?;
    writeln!(out, "  Credits Completed: {credits_completed}")?;
    writeln!(out, "  Current Grade: {letter_grade}")?;

    writeln!(out, "\nFinancial Information:")?;
    writeln!(out, "  Tuition Balance: ${tuition_owed:.2}")?;

    writeln!(out, "\n═══ END OF SEMESTER UPDATE ═══")?;

    age = 20;
    gpa = 3.80;
    credits_completed = 60;
    letter_grade = 'A';
    tuition_owed = 3200.00;

    writeln!(out, "\nUpdated Profile:")?;
    writeln!(out, "  Age: {age} years old (Happy Birthday!)")?;
    writeln!(out, "  New GPA: {gpa:.2} (Great improvement!)")?;
    writeln!(out, "  Credits Completed: {credits_completed}")?;
    writeln!(out, "  New Grade: {letter_grade} (Excellent work!)")?;
    writeln!(out, "  Tuition Balance: ${tuition_owed:.2}")?;

    let credits_remaining = CREDITS_TO_GRADUATE - credits_completed;
    let amount_paid = starting_tuition - tuition_owed;

    writeln!(out, "\nCalculated Information:")?;
    writeln!(out, "  Credits remaining to graduate: {credits_remaining}")?;
    writeln!(out, "  Amount paid this semester: ${amount_paid:.2}")?;
    Ok(())
}

const MAX_NAME_LENGTH: usize = 50;
const CURRENT_YEAR: i32 = 2024;
const GRAVITY: f32 = 9.81;
const LIGHT_SPEED: f64 = 299_792_458.0;
const WELCOME_MESSAGE: &str = "Welcome to Variables Demo!";

static TOUR_RUNS: AtomicU32 = AtomicU32::new(0);

fn tour<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "╔════════════════════════════════════════════════════════════╗")?;
    writeln!(console, "║               RUST VARIABLES & DATA TYPES                  ║")?;
    writeln!(console, "║                   COMPREHENSIVE DEMO                       ║")?;
    writeln!(console, "╚════════════════════════════════════════════════════════════╝")?;

    writeln!(console, "\nSystem Information:")?;
    writeln!(console, "size_of::<char>(): {} byte(s)", size_of::<char>())?;
    writeln!(console, "size_of::<i32>(): {} byte(s)", size_of::<i32>())?;
    writeln!(console, "size_of::<i64>(): {} byte(s)", size_of::<i64>())?;
    writeln!(console, "size_of::<f32>(): {} byte(s)", size_of::<f32>())?;
    writeln!(console, "size_of::<f64>(): {} byte(s)", size_of::<f64>())?;
    writeln!(console, "size_of::<&u8>(): {} byte(s)", size_of::<&u8>())?;

    integer_types(console)?;
    character_type(console)?;
    floating_point_types(console)?;
    type_conversions(console)?;
    constants_and_literals(console)?;
    scope_and_shadowing(console)?;
    formatting(console)?;

    let choice = optional(console.ask_int(
        "\n\nWould you like to try the interactive demo? (1=yes, 0=no): ",
        "1 or 0",
    ))?;
    if choice == Some(1) {
        interactive_section(console)?;
    }

    summary(console)
}

fn section_header<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "╔══════════════════════════════════════╗")?;
    writeln!(out, "║{title:^38}║")?;
    writeln!(out, "╚══════════════════════════════════════╝")?;
    Ok(())
}

fn integer_types<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "INTEGER TYPES")?;

    let tiny: i8 = 127;
    let small: i16 = 32_767;
    let regular: i32 = 2_147_483_647;
    let big: i64 = 9_223_372_036_854_775_807;
    let pointer_sized: isize = isize::MAX;

    writeln!(
        out,
        "Data Type    | Value                | Size     | Min Value            | Max Value"
    )?;
    writeln!(
        out,
        "-------------|----------------------|----------|----------------------|---------------------"
    )?;
    let rows: [(&str, i128, usize, i128, i128); 5] = [
        ("i8", tiny.into(), size_of::<i8>(), i8::MIN.into(), i8::MAX.into()),
        ("i16", small.into(), size_of::<i16>(), i16::MIN.into(), i16::MAX.into()),
        ("i32", regular.into(), size_of::<i32>(), i32::MIN.into(), i32::MAX.into()),
        ("i64", big.into(), size_of::<i64>(), i64::MIN.into(), i64::MAX.into()),
        (
            "isize",
            pointer_sized as i128,
            size_of::<isize>(),
            isize::MIN as i128,
            isize::MAX as i128,
        ),
    ];
    for (name, value, size, min, max) in rows {
        writeln!(
            out,
            "{name:<12} | {value:>20} | {size:>2} bytes | {min:>20} | {max:>20}"
        )?;
    }

    writeln!(out, "\n--- Unsigned vs Signed Comparison ---")?;
    let positive_only: u32 = u32::MAX;
    let can_be_negative: i32 = -1_000_000;
    writeln!(out, "u32: {positive_only} (never negative)")?;
    writeln!(out, "i32: {can_be_negative} (can be negative)")?;

    writeln!(out, "\n--- Overflow Demonstration ---")?;
    let max_u8: u8 = u8::MAX;
    writeln!(out, "u8 max: {max_u8}")?;
    writeln!(out, "wrapping_add(1): {}", max_u8.wrapping_add(1))?;
    writeln!(out, "checked_add(1): {:?}", max_u8.checked_add(1))?;
    writeln!(out, "saturating_add(1): {}", max_u8.saturating_add(1))?;
    Ok(())
}

fn character_type<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "CHARACTER TYPE")?;

    writeln!(out, "Character literals and their code points:")?;
    for (label, c) in [("Letter", 'A'), ("Digit", '7'), ("Symbol", '@')] {
        writeln!(out, "{label} '{c}' has code point: {}", u32::from(c))?;
    }
    writeln!(out, "Newline '\\n' has code point: {}", u32::from('\n'))?;
    writeln!(out, "Tab '\\t' has code point: {}", u32::from('\t'))?;

    writeln!(out, "\n--- Character Arithmetic ---")?;
    let uppercase = b'A';
    let lowercase = uppercase + 32;
    writeln!(out, "Uppercase: {} (ASCII {uppercase})", char::from(uppercase))?;
    writeln!(out, "Lowercase: {} (ASCII {lowercase})", char::from(lowercase))?;
    writeln!(
        out,
        "to_ascii_lowercase: {}",
        char::from(uppercase).to_ascii_lowercase()
    )?;

    writeln!(out, "\n--- Character Ranges ---")?;
    writeln!(out, "u8 range: {} to {}", u8::MIN, u8::MAX)?;
    writeln!(out, "char range: U+0000 to U+{:04X}", u32::from(char::MAX))?;
    Ok(())
}

fn floating_point_types<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "FLOATING-POINT TYPES")?;

    let single_precision: f32 = std::f32::consts::PI;
    let double_precision: f64 = std::f64::consts::PI;

    writeln!(out, "Type         | Value                    | Size     | Precision")?;
    writeln!(out, "-------------|--------------------------|----------|----------")?;
    writeln!(
        out,
        "f32          | {:>24.7} | {:>2} bytes | ~7 digits",
        single_precision,
        size_of::<f32>()
    )?;
    writeln!(
        out,
        "f64          | {:>24.15} | {:>2} bytes | ~15 digits",
        double_precision,
        size_of::<f64>()
    )?;

    writeln!(out, "\n--- Scientific Notation ---")?;
    let large_number: f64 = 1.23e10;
    let small_number: f64 = 4.56e-5;
    writeln!(out, "Large number: {large_number:.2e} = {large_number:.0}")?;
    writeln!(out, "Small number: {small_number:.2e} = {small_number:.7}")?;
    writeln!(out, "Speed of light: {LIGHT_SPEED:.3e} m/s")?;

    writeln!(out, "\n--- Precision Limitations ---")?;
    let precise_f32: f32 = 1.234_567_9;
    let precise_f64: f64 = 1.234_567_890_123_456_7;
    writeln!(out, "f32 precision: {precise_f32:.10}")?;
    writeln!(out, "f64 precision: {precise_f64:.20}")?;
    writeln!(out, "0.1 + 0.2 = {:.17}", 0.1_f64 + 0.2_f64)?;

    writeln!(out, "\n--- Floating-Point Limits ---")?;
    writeln!(out, "f32 min positive: {:e}, max: {:e}", f32::MIN_POSITIVE, f32::MAX)?;
    writeln!(out, "f64 min positive: {:e}, max: {:e}", f64::MIN_POSITIVE, f64::MAX)?;
    Ok(())
}

fn type_conversions<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "TYPE CONVERSIONS")?;

    writeln!(out, "--- Lossless Conversions (From) ---")?;
    let int_value: i32 = 42;
    let widened = f64::from(int_value);
    writeln!(out, "i32 {int_value} → f64 {widened:.1}")?;

    writeln!(out, "\n--- Lossy Conversions (as) ---")?;
    let float_value: f32 = 3.99;
    writeln!(out, "f32 {float_value:.2} as i32 = {} (truncated)", float_value as i32)?;
    let precise_value: f64 = 3.99999;
    writeln!(out, "{precise_value:.5} as i32 = {}", precise_value as i32)?;
    writeln!(out, "300 as u8 = {}", 300_i32 as u8)?;

    writeln!(out, "\n--- Division Examples ---")?;
    let (a, b): (i32, i32) = (7, 3);
    writeln!(out, "Integer division: {a} / {b} = {}", a / b)?;
    writeln!(out, "Remainder: {a} % {b} = {}", a % b)?;
    writeln!(
        out,
        "Float division: {a} / {b} = {:.2}",
        f64::from(a) / f64::from(b)
    )?;

    writeln!(out, "\n--- Widening in Expressions ---")?;
    let small: i8 = 10;
    let medium: i16 = 20;
    let large = i32::from(small) + i32::from(medium);
    writeln!(out, "i8({small}) + i16({medium}) = i32({large})")?;
    let f: f32 = 2.5;
    let d = f64::from(f) + 1.0;
    writeln!(out, "f32({f:.1}) + 1 = f64({d:.1})")?;
    Ok(())
}

fn constants_and_literals<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "CONSTANTS & LITERALS")?;

    writeln!(out, "--- Literal Constants ---")?;
    writeln!(out, "Integer literals:")?;
    writeln!(out, "  Decimal: {}", 42)?;
    writeln!(out, "  Octal: {} (written as 0o{:o})", 0o52, 0o52)?;
    writeln!(out, "  Hexadecimal: {} (written as 0x{:X})", 0x2A, 0x2A)?;
    writeln!(out, "  Binary: {} (written as 0b{:b})", 0b10_1010, 0b10_1010)?;

    writeln!(out, "\nFloating-point literals:")?;
    writeln!(out, "  f32: {:.2} (written as 9.75_f32)", 9.75_f32)?;
    writeln!(out, "  f64: {:.5} (written as 1.23456)", 1.23456_f64)?;
    writeln!(out, "  Scientific: {:.2e} (written as 1.5e3)", 1.5e3_f64)?;

    writeln!(out, "\nCharacter literals:")?;
    writeln!(out, "  Regular: '{}'", 'A')?;
    writeln!(out, "  Escape sequences: newline='\\n', tab='\\t', quote='\\''")?;

    writeln!(out, "\n--- Named Constants ---")?;
    writeln!(out, "std::f64::consts::PI: {:.10}", std::f64::consts::PI)?;
    writeln!(out, "const GRAVITY: {GRAVITY:.2}")?;
    writeln!(out, "const MAX_NAME_LENGTH: {MAX_NAME_LENGTH}")?;
    writeln!(out, "const CURRENT_YEAR: {CURRENT_YEAR}")?;

    let fixed_value = 100;
    writeln!(out, "let fixed_value = {fixed_value} (immutable unless declared mut)")?;
    Ok(())
}

fn scope_and_shadowing<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "SCOPE & SHADOWING")?;

    writeln!(out, "--- Variable Scope ---")?;
    let outer_variable = 10;
    writeln!(out, "Outer scope variable: {outer_variable}")?;
    {
        let inner_variable = 20;
        writeln!(out, "Inner scope variable: {inner_variable}")?;
        writeln!(out, "Outer variable accessible in inner scope: {outer_variable}")?;

        let outer_variable = 30;
        writeln!(out, "Shadowed variable (inner): {outer_variable}")?;
    }
    writeln!(out, "Back to outer scope: {outer_variable}")?;

    writeln!(out, "\n--- Static Variables ---")?;
    let runs = TOUR_RUNS.fetch_add(1, Ordering::Relaxed) + 1;
    writeln!(out, "Static counter: {runs} (retains value between calls)")?;
    Ok(())
}

fn formatting<W: Write>(out: &mut W) -> Result<()> {
    section_header(out, "FORMAT SPECIFIERS")?;

    let number = 42;
    let decimal: f32 = 123.456;

    writeln!(out, "--- Integer Formatting ---")?;
    writeln!(out, "Default: {number}")?;
    writeln!(out, "Width 10: '{number:10}'")?;
    writeln!(out, "Left-aligned: '{number:<10}'")?;
    writeln!(out, "Zero-padded: '{number:010}'")?;
    writeln!(out, "Hexadecimal: {number:x} (lowercase), {number:X} (uppercase)")?;
    writeln!(out, "Octal: {number:o}")?;

    writeln!(out, "\n--- Floating-Point Formatting ---")?;
    writeln!(out, "Default: {decimal}")?;
    writeln!(out, "2 decimals: {decimal:.2}")?;
    writeln!(out, "Width 10, 2 decimals: '{decimal:10.2}'")?;
    writeln!(out, "Left-aligned: '{decimal:<10.2}'")?;
    writeln!(out, "Scientific notation: {decimal:.2e}")?;

    writeln!(out, "\n--- Character and String Formatting ---")?;
    let character = 'A';
    writeln!(out, "Character: '{character}', code point: {}", u32::from(character))?;
    writeln!(out, "String: '{WELCOME_MESSAGE}'")?;
    Ok(())
}

fn interactive_section<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    section_header(console, "INTERACTIVE DEMO")?;
    writeln!(console, "Let's practice with user input!")?;

    if let Some(age) = optional(console.ask_int("Enter your age: ", "your age"))? {
        writeln!(console, "You entered age: {age}")?;
        let age_in_months = age as f64 * 12.0;
        writeln!(console, "That's approximately {age_in_months:.1} months")?;
    }

    if let Some(height) = optional(console.ask_float(
        "Enter your height in meters (e.g., 1.75): ",
        "your height",
    ))? {
        writeln!(console, "You entered height: {height:.2} meters")?;
        let height_cm = (height * 100.0) as i64;
        writeln!(console, "That's {height_cm} centimeters")?;
    }

    if let Some(grade) = optional(console.ask_char("Enter your grade (A, B, C, D, F): ", "your grade"))? {
        writeln!(
            console,
            "You entered grade: '{grade}' (code point: {})",
            u32::from(grade)
        )?;
        if grade.is_ascii_uppercase() {
            writeln!(console, "Lowercase version: '{}'", grade.to_ascii_lowercase())?;
        }
    }
    Ok(())
}

fn summary<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "╔════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                        SUMMARY                             ║")?;
    writeln!(out, "╚════════════════════════════════════════════════════════════╝")?;
    writeln!(out, "You've learned about:")?;
    writeln!(out, "✓ Integer types (i8, i16, i32, i64, isize)")?;
    writeln!(out, "✓ Floating-point types (f32, f64)")?;
    writeln!(out, "✓ The char type and code points")?;
    writeln!(out, "✓ Signed vs unsigned types and overflow handling")?;
    writeln!(out, "✓ Type conversions with From and as")?;
    writeln!(out, "✓ Constants vs variables")?;
    writeln!(out, "✓ Scope, shadowing and statics")?;
    writeln!(out, "✓ Format specifiers and output formatting")?;

    writeln!(out, "\nNext steps:")?;
    writeln!(out, "• Study operators and expressions (try `primer calc`)")?;
    writeln!(out, "• Learn about control flow (try `primer grades`)")?;
    writeln!(out, "• Practice with arrays and strings")?;
    writeln!(out, "• Explore functions and ownership")?;

    writeln!(
        out,
        "\n🎉 Congratulations! You've completed the Variables & Data Types demo!"
    )?;
    Ok(())
}
