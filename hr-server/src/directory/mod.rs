//! Employee Directory store
//!
//! Owns the mutable in-memory collection of employee records, newest first.
//! All operations are synchronous and total: a mutation targeting an unknown
//! id is a silent no-op (ids are generated internally and never constructed
//! by callers), reported to the caller only as `false`.

use std::collections::HashSet;

use chrono::NaiveDate;
use shared::models::{
    Attendance, ContractType, Employee, EmployeeCreate, EmployeeStatus, Sex,
};
use shared::util;

/// In-memory employee collection with lifecycle operations
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    /// Empty directory (tests, clean deployments)
    pub fn empty() -> Self {
        Self { employees: Vec::new() }
    }

    /// Directory pre-populated with the fixture roster
    pub fn with_seed_data() -> Self {
        Self { employees: seed_employees() }
    }

    /// Create a new employee from a validated payload.
    ///
    /// Status is forced to active, sanctions to zero, attendance to empty,
    /// and the start date to the current date. The record is prepended so
    /// the collection stays newest-first.
    pub fn add(&mut self, data: EmployeeCreate) -> Employee {
        let id = util::new_employee_id();
        let employee = Employee {
            avatar_url: util::default_avatar(&id),
            id,
            name: data.name,
            position: data.position,
            status: EmployeeStatus::Active,
            start_date: util::today(),
            end_date: None,
            salary: data.salary,
            sanctions: 0,
            attendance: Vec::new(),
            company: data.company,
            contract_type: data.contract_type,
            sex: data.sex,
            personal_info: data.personal_info,
        };
        self.employees.insert(0, employee.clone());
        employee
    }

    /// Replace the record matching `employee.id` wholesale.
    ///
    /// The store performs no field-level validation here; the caller is
    /// responsible for supplying a fully valid record (including keeping
    /// the sanction count non-negative, which the `u32` type enforces).
    pub fn update(&mut self, employee: Employee) -> bool {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                true
            }
            None => false,
        }
    }

    /// Set status to inactive and stamp the end date with today
    pub fn cancel_contract(&mut self, id: &str) -> bool {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.status = EmployeeStatus::Inactive;
                e.end_date = Some(util::today());
                true
            }
            None => false,
        }
    }

    /// Increment the sanction count by one
    pub fn sanction(&mut self, id: &str) -> bool {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.sanctions += 1;
                true
            }
            None => false,
        }
    }

    /// Set status back to active and clear the end date
    pub fn rehire(&mut self, id: &str) -> bool {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.status = EmployeeStatus::Active;
                e.end_date = None;
                true
            }
            None => false,
        }
    }

    /// Fresh snapshot of one record for the edit flow; commit via [`update`]
    ///
    /// [`update`]: EmployeeDirectory::update
    pub fn get(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    /// All records in stored order (newest first)
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Derived visible view: exactly the records whose company is in the
    /// unlocked set, in stored order. Pure function of both inputs, never
    /// cached.
    pub fn visible_to(&self, unlocked: &HashSet<String>) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| unlocked.contains(&e.company))
            .cloned()
            .collect()
    }

    /// Number of records grouped under a company name
    pub fn count_for_company(&self, company: &str) -> usize {
        self.employees.iter().filter(|e| e.company == company).count()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixture dates are hardcoded valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Fixture roster carried over from the original data set
fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".into(),
            name: "Carlos Rodriguez".into(),
            position: "Desarrollador Frontend".into(),
            avatar_url: util::default_avatar("carlos"),
            status: EmployeeStatus::Active,
            start_date: date(2022, 1, 15),
            end_date: None,
            salary: 50000.0,
            sanctions: 0,
            attendance: vec![Attendance {
                date: date(2024, 7, 26),
                clock_in: "09:05".into(),
                clock_out: "18:02".into(),
            }],
            company: "Pachy Central".into(),
            contract_type: ContractType::FullTime,
            sex: Some(Sex::Male),
            personal_info: Some("Experto en React y tecnologías web modernas.".into()),
        },
        Employee {
            id: "2".into(),
            name: "Ana Gomez".into(),
            position: "Gerente de Proyecto".into(),
            avatar_url: util::default_avatar("ana"),
            status: EmployeeStatus::Active,
            start_date: date(2021, 3, 20),
            end_date: None,
            salary: 75000.0,
            sanctions: 1,
            attendance: vec![Attendance {
                date: date(2024, 7, 26),
                clock_in: "08:58".into(),
                clock_out: "17:55".into(),
            }],
            company: "Pachy Central".into(),
            contract_type: ContractType::FullTime,
            sex: Some(Sex::Female),
            personal_info: Some(
                "Certificada en PMP con 5 años de experiencia liderando equipos.".into(),
            ),
        },
        Employee {
            id: "3".into(),
            name: "Luisa Fernandez".into(),
            position: "Diseñadora UI/UX".into(),
            avatar_url: util::default_avatar("luisa"),
            status: EmployeeStatus::Inactive,
            start_date: date(2020, 7, 10),
            end_date: Some(date(2023, 12, 31)),
            salary: 60000.0,
            sanctions: 0,
            attendance: vec![],
            company: "Pachy Central".into(),
            contract_type: ContractType::Temporary,
            sex: Some(Sex::Female),
            personal_info: Some(
                "Apasionada por crear interfaces intuitivas y centradas en el usuario.".into(),
            ),
        },
        Employee {
            id: "4".into(),
            name: "Juan Perez".into(),
            position: "Analista de Sistemas".into(),
            avatar_url: util::default_avatar("juan"),
            status: EmployeeStatus::Active,
            start_date: date(2023, 2, 1),
            end_date: None,
            salary: 45000.0,
            sanctions: 0,
            attendance: vec![Attendance {
                date: date(2024, 7, 26),
                clock_in: "09:00".into(),
                clock_out: "18:00".into(),
            }],
            company: "Adhoc S.A".into(),
            contract_type: ContractType::FullTime,
            sex: Some(Sex::Male),
            personal_info: Some("Especialista en bases de datos SQL.".into()),
        },
        Employee {
            id: "5".into(),
            name: "Sofia Lopez".into(),
            position: "Especialista en Marketing".into(),
            avatar_url: util::default_avatar("sofia"),
            status: EmployeeStatus::Active,
            start_date: date(2022, 9, 10),
            end_date: None,
            salary: 48000.0,
            sanctions: 1,
            attendance: vec![Attendance {
                date: date(2024, 7, 26),
                clock_in: "09:15".into(),
                clock_out: "18:10".into(),
            }],
            company: "Adhoc S.A".into(),
            contract_type: ContractType::PartTime,
            sex: Some(Sex::Female),
            personal_info: Some("Experta en campañas de redes sociales y SEO.".into()),
        },
        Employee {
            id: "6".into(),
            name: "Martin Torres".into(),
            position: "Soporte Técnico".into(),
            avatar_url: util::default_avatar("martin"),
            status: EmployeeStatus::Inactive,
            start_date: date(2021, 5, 1),
            end_date: Some(date(2024, 1, 20)),
            salary: 40000.0,
            sanctions: 2,
            attendance: vec![],
            company: "Adhoc S.A".into(),
            contract_type: ContractType::FullTime,
            sex: Some(Sex::Male),
            personal_info: Some("Resolución de problemas de hardware y software.".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload(company: &str) -> EmployeeCreate {
        EmployeeCreate {
            name: "Test Person".into(),
            position: "Tester".into(),
            salary: 1000.0,
            company: company.into(),
            contract_type: ContractType::Eventual,
            sex: None,
            personal_info: None,
        }
    }

    #[test]
    fn test_add_defaults() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let before = dir.len();

        let created = dir.add(create_payload("Pachy Central"));

        assert_eq!(created.status, EmployeeStatus::Active);
        assert_eq!(created.sanctions, 0);
        assert!(created.attendance.is_empty());
        assert_eq!(created.end_date, None);
        assert_eq!(created.start_date, util::today());
        assert_eq!(dir.len(), before + 1);
        // Newest first
        assert_eq!(dir.all()[0].id, created.id);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let a = dir.add(create_payload("Pachy Central"));
        let b = dir.add(create_payload("Adhoc S.A"));

        let mut seen = HashSet::new();
        for e in dir.all() {
            assert!(seen.insert(e.id.clone()), "duplicate id {}", e.id);
        }
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_cancel_then_rehire_round_trip() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let original = dir.get("1").unwrap();

        assert!(dir.cancel_contract("1"));
        let cancelled = dir.get("1").unwrap();
        assert_eq!(cancelled.status, EmployeeStatus::Inactive);
        assert_eq!(cancelled.end_date, Some(util::today()));

        assert!(dir.rehire("1"));
        let rehired = dir.get("1").unwrap();
        assert_eq!(rehired.status, EmployeeStatus::Active);
        assert_eq!(rehired.end_date, None);

        // Everything else untouched
        assert_eq!(rehired.name, original.name);
        assert_eq!(rehired.salary, original.salary);
        assert_eq!(rehired.sanctions, original.sanctions);
        assert_eq!(rehired.attendance, original.attendance);
    }

    #[test]
    fn test_sanction_increments_by_one() {
        let mut dir = EmployeeDirectory::with_seed_data();
        // Ana Gomez starts at 1
        assert_eq!(dir.get("2").unwrap().sanctions, 1);
        assert!(dir.sanction("2"));
        assert_eq!(dir.get("2").unwrap().sanctions, 2);

        for _ in 0..5 {
            dir.sanction("2");
        }
        assert_eq!(dir.get("2").unwrap().sanctions, 7);
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let mut edited = dir.get("2").unwrap();
        edited.sanctions = 0; // caller-side decrement, store accepts as-is
        edited.position = "Directora de Proyecto".into();

        assert!(dir.update(edited));
        let stored = dir.get("2").unwrap();
        assert_eq!(stored.sanctions, 0);
        assert_eq!(stored.position, "Directora de Proyecto");
    }

    #[test]
    fn test_update_preserves_order() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let order_before: Vec<String> = dir.all().iter().map(|e| e.id.clone()).collect();

        let mut edited = dir.get("3").unwrap();
        edited.salary = 61000.0;
        dir.update(edited);

        let order_after: Vec<String> = dir.all().iter().map(|e| e.id.clone()).collect();
        assert_eq!(order_before, order_after);
    }

    #[test]
    fn test_mutations_on_unknown_id_are_noops() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let snapshot: Vec<Employee> = dir.all().to_vec();

        assert!(!dir.cancel_contract("missing"));
        assert!(!dir.sanction("missing"));
        assert!(!dir.rehire("missing"));

        let mut ghost = dir.get("1").unwrap();
        ghost.id = "missing".into();
        assert!(!dir.update(ghost));

        assert_eq!(dir.all(), snapshot.as_slice());
    }

    #[test]
    fn test_get_returns_detached_snapshot() {
        let mut dir = EmployeeDirectory::with_seed_data();
        let mut snapshot = dir.get("1").unwrap();
        snapshot.name = "Renamed".into();
        // Editing the snapshot does not touch the store
        assert_eq!(dir.get("1").unwrap().name, "Carlos Rodriguez");
        dir.sanction("1");
        assert_eq!(snapshot.sanctions, 0);
    }

    #[test]
    fn test_visible_to_filters_by_company() {
        let dir = EmployeeDirectory::with_seed_data();

        let none: HashSet<String> = HashSet::new();
        assert!(dir.visible_to(&none).is_empty());

        let mut pachy = HashSet::new();
        pachy.insert("Pachy Central".to_string());
        let visible = dir.visible_to(&pachy);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|e| e.company == "Pachy Central"));
        assert!(visible.iter().any(|e| e.name == "Carlos Rodriguez"));
    }

    #[test]
    fn test_visible_to_random_sets() {
        use rand::Rng;

        let companies = ["Pachy Central", "Adhoc S.A", "Norte SRL", "Sur SRL"];
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let mut dir = EmployeeDirectory::empty();
            let n = rng.gen_range(0..30);
            for _ in 0..n {
                let company = companies[rng.gen_range(0..companies.len())];
                dir.add(create_payload(company));
            }

            let mut unlocked = HashSet::new();
            for company in &companies {
                if rng.gen_bool(0.5) {
                    unlocked.insert(company.to_string());
                }
            }

            let visible = dir.visible_to(&unlocked);
            let expected: Vec<&Employee> = dir
                .all()
                .iter()
                .filter(|e| unlocked.contains(&e.company))
                .collect();

            assert_eq!(visible.len(), expected.len());
            for (got, want) in visible.iter().zip(expected) {
                assert_eq!(got, want);
            }
            // And nothing locked ever leaks
            assert!(visible.iter().all(|e| unlocked.contains(&e.company)));
        }
    }

    #[test]
    fn test_count_for_company() {
        let dir = EmployeeDirectory::with_seed_data();
        assert_eq!(dir.count_for_company("Pachy Central"), 3);
        assert_eq!(dir.count_for_company("Adhoc S.A"), 3);
        assert_eq!(dir.count_for_company("Unknown Corp"), 0);
    }
}
