use crate::error::{PayslipError, Result};

/// The payroll columns the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    EmployeeId,
    Name,
    Email,
    BasicSalary,
    Allowances,
    Deductions,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::EmployeeId,
        Column::Name,
        Column::Email,
        Column::BasicSalary,
        Column::Allowances,
        Column::Deductions,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::EmployeeId => "Employee ID",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::BasicSalary => "Basic Salary",
            Column::Allowances => "Allowances",
            Column::Deductions => "Deductions",
        }
    }

    /// `Employee ID` may be absent; every other column must be present.
    pub fn is_required(self) -> bool {
        !matches!(self, Column::EmployeeId)
    }

    /// Header comparison ignores surrounding whitespace and ASCII case.
    pub fn matches(self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.header())
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Position of each known column in a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; 6],
}

impl ColumnMap {
    /// Locates the known columns, failing on the first required one that is
    /// missing. When a header appears twice, the first occurrence wins.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut indices = [None; 6];
        for (position, raw) in headers.into_iter().enumerate() {
            if let Some(column) = Column::ALL.iter().find(|c| c.matches(raw)) {
                indices[column.slot()].get_or_insert(position);
            }
        }

        if let Some(missing) = Column::ALL
            .iter()
            .find(|c| c.is_required() && indices[c.slot()].is_none())
        {
            return Err(PayslipError::MissingColumn(missing.header()));
        }

        Ok(Self { indices })
    }

    pub fn index(&self, column: Column) -> Option<usize> {
        self.indices[column.slot()]
    }

    /// Rewrites a header row so known columns carry their canonical name.
    ///
    /// Later duplicates of a known column are renamed after their position
    /// (`Name#6`), so only the first occurrence is read.
    pub fn canonical_headers<'a, I>(&self, headers: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        headers
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                if let Some(column) = Column::ALL.iter().find(|c| self.index(**c) == Some(position)) {
                    return column.header().to_string();
                }
                let raw = raw.trim();
                if Column::ALL.iter().any(|c| c.matches(raw)) {
                    format!("{raw}#{position}")
                } else {
                    raw.to_string()
                }
            })
            .collect()
    }
}
