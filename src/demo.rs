use std::collections::{BTreeMap, LinkedList};
use std::fmt;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::DemoConfig;
use crate::errors::DemoError;
use crate::frequency::word_frequencies;
use crate::priority::{LongestFirst, PriorityQueue, PriorityStack};
use crate::registry::{employee_directory, student_registry, Employee, Registry, Student};
use crate::select::select_kth_smallest;
use crate::sequences::sequences_equal;

/// Results of every exercise, in the order they are printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub k: usize,
    pub kth_smallest: i64,
    pub word_frequencies: BTreeMap<String, usize>,
    pub stack_pops: Vec<String>,
    pub queue_polls: Vec<String>,
    pub students: Vec<Student>,
    pub lists_equal: (bool, bool),
    pub employees: Vec<Employee>,
}

impl Report {
    pub fn to_json(&self) -> Result<String, DemoError> {
        serde_json::to_string_pretty(self).map_err(|err| DemoError::Render(err.to_string()))
    }
}

#[instrument(level = "info", skip(config), fields(k = config.k, len = config.sequence.len()))]
pub fn run(config: &DemoConfig) -> Result<Report, DemoError> {
    let kth_smallest = select_kth_smallest(&config.sequence, config.k)?;

    let mut stack = PriorityStack::new();
    for word in ["Zebra", "Apple", "Banana"] {
        stack.push(word.to_owned());
    }
    let stack_pops: Vec<String> = (0..2).filter_map(|_| stack.pop()).collect();

    let mut queue = PriorityQueue::new();
    for word in ["Cat", "Dog", "Elephant"] {
        queue.offer(LongestFirst::from(word));
    }
    let queue_polls: Vec<String> = (0..2).filter_map(|_| queue.poll()).map(|w| w.0).collect();

    let students: Vec<Student> = student_registry()?
        .entries()
        .into_iter()
        .map(|(_, student)| student.clone())
        .collect();

    let list1: LinkedList<i32> = LinkedList::from([1, 2, 3]);
    let list2: LinkedList<i32> = LinkedList::from([1, 2, 3]);
    let list3: LinkedList<i32> = LinkedList::from([1, 2, 4]);
    let lists_equal = (sequences_equal(&list1, &list2), sequences_equal(&list1, &list3));

    // hashed order is unstable, sort so the report is reproducible
    let directory = employee_directory()?;
    let mut employees: Vec<Employee> = directory.entries().into_iter().map(|(_, e)| e.clone()).collect();
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    let report = Report {
        k: config.k,
        kth_smallest,
        word_frequencies: word_frequencies(&config.text),
        stack_pops,
        queue_polls,
        students,
        lists_equal,
        employees,
    };

    info!(kth_smallest = report.kth_smallest, "demo complete");
    Ok(report)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== COLLECTIONS DEMO ===")?;
        writeln!(f)?;
        writeln!(f, "(1) Kth Smallest (k={}): {}", self.k, self.kth_smallest)?;

        let freqs: Vec<String> = self
            .word_frequencies
            .iter()
            .map(|(word, count)| format!("{}={}", word, count))
            .collect();
        writeln!(f)?;
        writeln!(f, "(2) Word Frequencies: {{{}}}", freqs.join(", "))?;

        writeln!(f)?;
        writeln!(f, "(3a) Stack (Priority): {}", self.stack_pops.join(", "))?;
        writeln!(f, "(3b) Queue (Priority): {}", self.queue_polls.join(", "))?;

        writeln!(f)?;
        writeln!(f, "(4) Students (Sorted):")?;
        for student in &self.students {
            writeln!(f, "  {}", student)?;
        }

        writeln!(f)?;
        writeln!(f, "(5) Lists Equal? {}, {}", self.lists_equal.0, self.lists_equal.1)?;

        writeln!(f)?;
        writeln!(f, "(6) Employees:")?;
        for employee in &self.employees {
            writeln!(f, "  {}", employee)?;
        }

        writeln!(f)?;
        write!(f, "=== All Tasks Completed Successfully! ===")
    }
}
