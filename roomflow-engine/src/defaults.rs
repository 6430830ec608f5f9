//! Built-in housekeeping catalog used by bulk setup when no catalog file is
//! supplied. Deliberately a plain data table.

use roomflow_core::{
    Catalog, Frequency, ScheduleTemplate, TaskPriority, TaskTemplate, WILDCARD_ROOM_TYPE,
};

pub fn default_catalog() -> Catalog {
    Catalog::new(vec![
        standard_rooms(),
        suites_and_family(),
        accessible_rooms(),
        all_rooms(),
    ])
}

fn standard_rooms() -> ScheduleTemplate {
    ScheduleTemplate::new("Standard rooms", "Daily housekeeping for standard inventory")
        .with_room_type("standard")
        .with_room_type("double")
        .with_task(
            TaskTemplate::new("daily_cleaning", Frequency::Daily)
                .with_duration(30)
                .with_instruction("Knock and announce before entering")
                .with_checklist_item("Make beds", true, 8)
                .with_checklist_item("Empty bins", true, 3)
                .with_checklist_item("Wipe surfaces", true, 7)
                .with_checklist_item("Restock amenities", false, 5)
                .with_supply("all_purpose_cleaner")
                .with_supply("fresh_linens"),
        )
        .with_task(
            TaskTemplate::new("checkout_cleaning", Frequency::Checkout)
                .with_priority(TaskPriority::High)
                .with_duration(45)
                .with_instruction("Full turnover before the next check-in")
                .with_checklist_item("Strip and remake beds", true, 12)
                .with_checklist_item("Sanitize bathroom", true, 15)
                .with_checklist_item("Vacuum and mop", true, 10)
                .with_checklist_item("Check for left-behind items", true, 3)
                .with_tool("vacuum")
                .with_supply("disinfectant"),
        )
        .with_task(
            TaskTemplate::new("checkin_prep", Frequency::Checkin)
                .with_duration(15)
                .with_checklist_item("Set thermostat", false, 2)
                .with_checklist_item("Verify amenities", true, 5)
                .with_checklist_item("Final walkthrough", true, 5),
        )
}

fn suites_and_family() -> ScheduleTemplate {
    ScheduleTemplate::new("Suites & family rooms", "Larger units with kitchenettes")
        .with_room_type("suite")
        .with_room_type("family")
        .with_task(
            TaskTemplate::new("daily_cleaning", Frequency::Daily)
                .with_duration(45)
                .with_checklist_item("Make beds", true, 12)
                .with_checklist_item("Clean kitchenette", true, 15)
                .with_checklist_item("Wipe surfaces", true, 8)
                .with_skill("kitchen_cleaning")
                .with_supply("degreaser"),
        )
        .with_task(
            TaskTemplate::new("deep_cleaning", Frequency::Weekly)
                .with_priority(TaskPriority::High)
                .with_duration(90)
                .with_instruction("Move furniture where practical")
                .with_checklist_item("Shampoo carpets", true, 30)
                .with_checklist_item("Descale kitchen fixtures", true, 20)
                .with_checklist_item("Clean behind appliances", false, 20)
                .with_skill("advanced_cleaning")
                .with_tool("carpet_shampooer"),
        )
}

fn accessible_rooms() -> ScheduleTemplate {
    ScheduleTemplate::new("Accessible rooms", "ADA-compliant inventory")
        .with_room_type("accessible")
        .with_task(
            TaskTemplate::new("accessible_cleaning", Frequency::Daily)
                .with_duration(40)
                .with_instruction("Keep pathways and transfer spaces clear")
                .with_checklist_item("Make beds", true, 8)
                .with_checklist_item("Sanitize grab bars", true, 6)
                .with_checklist_item("Check door clearances", true, 4)
                .with_checklist_item("Verify emergency pull cords", true, 3)
                .with_skill("accessibility_cleaning"),
        )
        .with_task(
            TaskTemplate::new("accessibility_equipment_check", Frequency::Weekly)
                .with_priority(TaskPriority::High)
                .with_duration(30)
                .with_checklist_item("Test shower chair stability", true, 8)
                .with_checklist_item("Inspect ramp surfaces", true, 8)
                .with_skill("ada_compliance"),
        )
}

fn all_rooms() -> ScheduleTemplate {
    ScheduleTemplate::new("All rooms", "Property-wide fallback program")
        .with_room_type(WILDCARD_ROOM_TYPE)
        .with_task(
            TaskTemplate::new("safety_inspection", Frequency::Monthly)
                .with_priority(TaskPriority::High)
                .with_duration(20)
                .with_checklist_item("Test smoke detector", true, 5)
                .with_checklist_item("Check window locks", true, 5)
                .with_checklist_item("Inspect electrical outlets", true, 5),
        )
        .with_task(
            TaskTemplate::new("touch_up", Frequency::AsNeeded)
                .with_priority(TaskPriority::Low)
                .with_duration(15)
                .with_checklist_item("Spot-clean marks", false, 8)
                .with_checklist_item("Refresh linens", false, 7),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_core_room_types() {
        let catalog = default_catalog();

        assert_eq!(catalog.find_for_room_type("standard").unwrap().name, "Standard rooms");
        assert_eq!(catalog.find_for_room_type("suite").unwrap().name, "Suites & family rooms");
        assert_eq!(catalog.find_for_room_type("family").unwrap().name, "Suites & family rooms");
        assert_eq!(catalog.find_for_room_type("accessible").unwrap().name, "Accessible rooms");
        // Unknown types fall back to the wildcard program.
        assert_eq!(catalog.find_for_room_type("penthouse").unwrap().name, "All rooms");
    }

    #[test]
    fn test_every_template_has_a_checklist_and_positive_duration() {
        for schedule in &default_catalog().schedules {
            for template in &schedule.tasks {
                assert!(!template.checklist.is_empty(), "{} has no checklist", template.task_type);
                assert!(template.estimated_duration_minutes > 0);
            }
        }
    }

    #[test]
    fn test_skill_overrides_have_matching_skills_in_catalog() {
        let catalog = default_catalog();
        let suite = catalog.find_for_room_type("suite").unwrap();
        assert!(suite
            .tasks
            .iter()
            .any(|t| t.required_skills.contains("advanced_cleaning")));

        let accessible = catalog.find_for_room_type("accessible").unwrap();
        assert!(accessible
            .tasks
            .iter()
            .any(|t| t.required_skills.contains("accessibility_cleaning")));
    }
}
