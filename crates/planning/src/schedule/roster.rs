/// Roster tables and team configuration
use std::collections::HashMap;

use super::types::Jour;

/// The two fixed day-to-person assignment tables. One is used on even
/// weeks, the other on odd weeks. Built once at startup and never
/// mutated afterwards; only Tuesday, Wednesday and Thursday carry
/// assignments.
#[derive(Debug, Clone)]
pub struct WeekRosters {
    pub even: HashMap<Jour, String>,
    pub odd: HashMap<Jour, String>,
}

impl WeekRosters {
    /// Returns the table matching the given week parity.
    pub fn table_for(&self, is_even: bool) -> &HashMap<Jour, String> {
        if is_even {
            &self.even
        } else {
            &self.odd
        }
    }
}

impl Default for WeekRosters {
    fn default() -> Self {
        let even = HashMap::from([
            (Jour::Mardi, "Vincent".to_string()),
            (Jour::Mercredi, "Gilbert".to_string()),
            (Jour::Jeudi, "Maurice".to_string()),
        ]);
        let odd = HashMap::from([
            (Jour::Mardi, "Fabien".to_string()),
            (Jour::Mercredi, "Gilbert".to_string()),
            (Jour::Jeudi, "Place réservée".to_string()),
        ]);
        WeekRosters { even, odd }
    }
}

/// A team member. To rename someone, change only `name`; to take
/// someone out of the listing, set `active` to false.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// The configured team.
pub fn team() -> Vec<Person> {
    vec![
        Person {
            id: "person1",
            name: "Fabien",
            active: true,
        },
        Person {
            id: "person2",
            name: "Gilbert",
            active: true,
        },
        Person {
            id: "person3",
            name: "Vincent",
            active: true,
        },
        Person {
            id: "person4",
            name: "Maurice",
            active: true,
        },
        Person {
            id: "person5",
            name: "Place réservée",
            active: true,
        },
        Person {
            id: "person6",
            name: "Place réservée 2",
            active: true,
        },
    ]
}

/// Names of the active team members, in configuration order.
pub fn active_people(team: &[Person]) -> Vec<&'static str> {
    team.iter().filter(|p| p.active).map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_table_assignments() {
        let rosters = WeekRosters::default();
        assert_eq!(rosters.even.get(&Jour::Mardi).unwrap(), "Vincent");
        assert_eq!(rosters.even.get(&Jour::Mercredi).unwrap(), "Gilbert");
        assert_eq!(rosters.even.get(&Jour::Jeudi).unwrap(), "Maurice");
        assert!(rosters.even.get(&Jour::Lundi).is_none());
        assert!(rosters.even.get(&Jour::Vendredi).is_none());
    }

    #[test]
    fn odd_table_assignments() {
        let rosters = WeekRosters::default();
        assert_eq!(rosters.odd.get(&Jour::Mardi).unwrap(), "Fabien");
        assert_eq!(rosters.odd.get(&Jour::Mercredi).unwrap(), "Gilbert");
        assert_eq!(rosters.odd.get(&Jour::Jeudi).unwrap(), "Place réservée");
    }

    #[test]
    fn table_for_selects_by_parity() {
        let rosters = WeekRosters::default();
        assert_eq!(
            rosters.table_for(true).get(&Jour::Mardi),
            rosters.even.get(&Jour::Mardi)
        );
        assert_eq!(
            rosters.table_for(false).get(&Jour::Mardi),
            rosters.odd.get(&Jour::Mardi)
        );
    }

    #[test]
    fn active_people_follows_flags() {
        let mut members = team();
        assert_eq!(active_people(&members).len(), 6);

        members[5].active = false;
        let names = active_people(&members);
        assert_eq!(names.len(), 5);
        assert!(!names.contains(&"Place réservée 2"));
        assert!(names.contains(&"Vincent"));
    }
}
