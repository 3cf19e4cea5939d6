//! Built-in courses and the portal resource catalog.

use crate::course::Course;
use crate::error::Result;
use crate::module::Module;
use crate::resource::{Resource, ResourceCatalog, ResourceCategory, ResourceKind};

/// Number of modules open at the start of each built-in course.
const OPEN_MODULES: usize = 5;

type ModuleRow = (&'static str, &'static str, [&'static str; 4]);

fn modules(rows: &[ModuleRow]) -> Result<Vec<Module>> {
    rows.iter()
        .enumerate()
        .map(|(i, (title, duration, lessons))| -> Result<Module> {
            Ok(Module::with_label(i as u32 + 1, *title, duration)?
                .lessons(lessons.iter().copied())
                .locked(i >= OPEN_MODULES))
        })
        .collect()
}

/// Customer Service Excellence (`CSE`), 10 modules.
pub fn customer_service_excellence() -> Result<Course> {
    let rows: [ModuleRow; 10] = [
        ("Understanding Customer Psychology in Crisis", "45 min", [
            "Emotional states during disasters",
            "Stress response and decision making",
            "Building trust in crisis situations",
            "Cultural sensitivity considerations",
        ]),
        ("First Contact Excellence", "60 min", [
            "Making a powerful first impression",
            "Active listening techniques",
            "Empathy without over-promising",
            "Setting realistic expectations",
        ]),
        ("Communication During Restoration", "75 min", [
            "Daily update protocols",
            "Explaining technical processes simply",
            "Managing timeline expectations",
            "Handling schedule changes",
        ]),
        ("Difficult Conversations", "90 min", [
            "Delivering bad news professionally",
            "De-escalation techniques",
            "Handling angry customers",
            "Managing unrealistic expectations",
        ]),
        ("Insurance Communication", "60 min", [
            "Explaining coverage limitations",
            "Documentation requirements",
            "Three-way communication strategies",
            "Advocating for the customer",
        ]),
        ("Quality Assurance & Follow-up", "45 min", [
            "Final walkthrough protocols",
            "Ensuring customer satisfaction",
            "Post-restoration follow-up",
            "Generating positive reviews",
        ]),
        ("Crisis Intervention", "60 min", [
            "Recognizing trauma responses",
            "When to involve professionals",
            "Supporting vulnerable customers",
            "Maintaining professional boundaries",
        ]),
        ("Technology & Customer Service", "45 min", [
            "Using the customer portal effectively",
            "Photo documentation communication",
            "Digital updates and reporting",
            "Video call best practices",
        ]),
        ("Building Long-term Relationships", "30 min", [
            "Creating customer advocates",
            "Referral generation strategies",
            "Community engagement",
            "Brand ambassador development",
        ]),
        ("Final Assessment", "60 min", [
            "Review of key concepts",
            "Role-playing scenarios",
            "Written assessment",
            "Certification requirements",
        ]),
    ];

    Ok(Course::new("CSE", "Customer Service Excellence", modules(&rows)?)?
        .with_tagline("Master the art of customer communication during disaster recovery")
        .with_detail("Focus", "Customer Relations")
        .with_detail("Duration", "10 Hours Total")
        .with_detail("Certification", "NRP Excellence Badge")
        .with_resources([
            "Course Handbook",
            "Communication Templates",
            "Crisis Scenarios Guide",
        ]))
}

/// Water Damage Restoration Technician (`WRT`), 12 modules.
pub fn water_damage_restoration() -> Result<Course> {
    let rows: [ModuleRow; 12] = [
        ("Introduction to Water Damage Restoration", "45 min", [
            "Understanding water damage categories",
            "Classes of water damage",
            "Health and safety considerations",
            "PPE requirements",
        ]),
        ("Psychrometry and Drying Science", "60 min", [
            "Understanding psychrometry",
            "Temperature and humidity relationships",
            "Dew point and vapor pressure",
            "Evaporation and dehumidification",
        ]),
        ("Inspection and Moisture Detection", "90 min", [
            "Initial inspection procedures",
            "Moisture meter usage",
            "Thermal imaging techniques",
            "Documentation requirements",
        ]),
        ("Water Extraction Equipment", "75 min", [
            "Portable extractors",
            "Truck-mount systems",
            "Extraction tools and accessories",
            "Maintenance and safety",
        ]),
        ("Structural Drying Equipment", "90 min", [
            "Air movers and placement",
            "Dehumidifier types and sizing",
            "HEPA air scrubbers",
            "Monitoring equipment",
        ]),
        ("Drying Goals and Strategies", "60 min", [
            "Setting drying goals",
            "Open vs closed drying systems",
            "Specialty drying situations",
            "Hardwood floor drying",
        ]),
        ("Antimicrobial Application", "45 min", [
            "When to apply antimicrobials",
            "Types of antimicrobials",
            "Application methods",
            "Safety and regulations",
        ]),
        ("Contents Processing", "60 min", [
            "Pack-out procedures",
            "Cleaning and restoration methods",
            "Electronics restoration",
            "Document drying",
        ]),
        ("Australian Standards & Regulations", "45 min", [
            "AS/NZS 3500 Plumbing standards",
            "Building Code of Australia",
            "WorkSafe requirements",
            "Insurance guidelines",
        ]),
        ("Documentation & Xactimate", "120 min", [
            "Photo documentation",
            "Moisture mapping",
            "Daily drying logs",
            "Xactimate line items",
        ]),
        ("Customer Communication", "30 min", [
            "Setting expectations",
            "Explaining the process",
            "Handling concerns",
            "Final walkthrough",
        ]),
        ("Final Assessment & Certification", "90 min", [
            "Review of key concepts",
            "Case studies",
            "Final examination",
            "Certification requirements",
        ]),
    ];

    Ok(Course::new(
        "WRT",
        "Water Damage Restoration Technician (WRT)",
        modules(&rows)?,
    )?
    .with_tagline("IICRC Certification Course - Australian Edition")
    .with_detail("Modules", "12 Comprehensive Modules")
    .with_detail("Duration", "3 Days (24 Hours)")
    .with_detail("Certification", "IICRC WRT Certificate")
    .with_resources([
        "Course Manual (PDF)",
        "Quick Reference Guide",
        "Psychrometric Chart",
        "Australian Standards",
    ]))
}

/// Every built-in course.
pub fn builtin_courses() -> Result<Vec<Course>> {
    Ok(vec![customer_service_excellence()?, water_damage_restoration()?])
}

/// Find a built-in course by code (`wrt`) or a word of its name (`water`).
pub fn find_course(key: &str) -> Result<Option<Course>> {
    let key = key.trim().to_lowercase();
    Ok(builtin_courses()?.into_iter().find(|course| {
        course.code.to_lowercase() == key
            || course
                .name
                .to_lowercase()
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| !word.is_empty() && word == key)
    }))
}

/// Portal-wide downloadable resources.
pub fn resource_catalog() -> ResourceCatalog {
    use ResourceKind::*;

    let category = |name: &str, items: Vec<Resource>| ResourceCategory {
        name: name.to_string(),
        items,
    };

    ResourceCatalog::new(vec![
        category("Training Materials", vec![
            Resource::document("IICRC S500 Water Damage Guide", Pdf, "15.2 MB"),
            Resource::document("Fire & Smoke Restoration Manual", Pdf, "12.8 MB"),
            Resource::document("Mould Remediation Best Practices", Pdf, "8.5 MB"),
            Resource::document("Safety Protocols Handbook", Pdf, "5.3 MB"),
        ]),
        category("Video Tutorials", vec![
            Resource::video("Advanced Water Extraction Techniques", 45),
            Resource::video("HEPA Filtration Setup Guide", 30),
            Resource::video("Thermal Imaging for Moisture Detection", 25),
            Resource::video("PPE Best Practices", 20),
        ]),
        category("Equipment Guides", vec![
            Resource::document("Dehumidifier Operation Manual", Pdf, "3.2 MB"),
            Resource::document("Air Mover Placement Guide", Pdf, "2.8 MB"),
            Resource::document("Moisture Meter Calibration", Pdf, "1.5 MB"),
            Resource::document("HEPA Vacuum Maintenance", Pdf, "2.1 MB"),
        ]),
        category("Certifications", vec![
            Resource::document("IICRC Certification Study Guide", Pdf, "18.5 MB"),
            Resource::document("WRT Exam Preparation", Pdf, "10.2 MB"),
            Resource::document("ASD Applied Structural Drying", Pdf, "12.3 MB"),
            Resource::document("AMRT Mould Remediation Tech", Pdf, "9.8 MB"),
        ]),
        category("Insurance & Compliance", vec![
            Resource::document("Insurance Claim Documentation", Pdf, "4.5 MB"),
            Resource::document("Xactimate Estimating Guide", Pdf, "7.2 MB"),
            Resource::document("WorkSafe Compliance Checklist", Pdf, "2.3 MB"),
            Resource::document("Quality Assurance Standards", Pdf, "3.8 MB"),
        ]),
        category("Forms & Templates", vec![
            Resource::document("Job Assessment Template", Doc, "156 KB"),
            Resource::document("Customer Agreement Form", Doc, "98 KB"),
            Resource::document("Daily Progress Report", Doc, "125 KB"),
            Resource::document("Invoice Template", Xls, "245 KB"),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModuleId;

    #[test]
    fn test_customer_service_course() {
        let course = customer_service_excellence().unwrap();
        assert_eq!(course.code, "CSE");
        assert_eq!(course.len(), 10);
        assert_eq!(course.initially_unlocked().count(), 5);
        assert!(course.module(ModuleId::new(6)).unwrap().initially_locked);
        assert_eq!(course.total_duration_minutes(), 570);
    }

    #[test]
    fn test_water_damage_course() {
        let course = water_damage_restoration().unwrap();
        assert_eq!(course.code, "WRT");
        assert_eq!(course.len(), 12);
        assert_eq!(course.initially_unlocked().count(), 5);
        assert_eq!(course.total_duration_minutes(), 810);
        assert_eq!(course.resources.len(), 4);
    }

    #[test]
    fn test_find_course() {
        assert_eq!(find_course("wrt").unwrap().unwrap().code, "WRT");
        assert_eq!(find_course("Customer").unwrap().unwrap().code, "CSE");
        assert!(find_course("fire").unwrap().is_none());
    }

    #[test]
    fn test_resource_catalog_shape() {
        let catalog = resource_catalog();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.total_items(), 24);
        assert!(catalog.categories().iter().all(|c| c.items.len() == 4));
    }
}
