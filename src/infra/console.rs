use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Построчный канал вопрос/ответ для человека за столом.
pub trait Console {
    /// Показать строку игроку.
    fn show(&mut self, line: &str);

    /// Задать вопрос и прочитать ответ. `None` – ввод закончился или прерван.
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Консоль поверх stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        let mut stdout = io::stdout();
        print!("{message}");
        stdout.flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Консоль с заранее заданными ответами (тесты, реплей).
/// Всё, что показывается игроку, сохраняется в `transcript`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Встречается ли `needle` в показанном тексте.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.transcript.push(message.to_string());
        self.inputs.pop_front()
    }
}
