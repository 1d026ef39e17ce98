//! Demo roster and backlog.

use crate::models::{Complexity, Employee, ExperienceLevel, Priority, Task};

fn employee(
    id: &str,
    name: &str,
    skills: &[&str],
    level: ExperienceLevel,
    availability: f64,
) -> Employee {
    Employee::new(id, level)
        .with_name(name)
        .with_skills(skills.iter().copied())
        .with_availability(availability)
}

fn task(
    id: &str,
    title: &str,
    description: &str,
    skills: &[&str],
    hours: f64,
    priority: Priority,
    complexity: Complexity,
) -> Task {
    Task::new(id, hours)
        .with_title(title)
        .with_description(description)
        .with_required_skills(skills.iter().copied())
        .with_priority(priority)
        .with_complexity(complexity)
}

/// Five-person roster matching [`sample_tasks`].
pub fn sample_employees() -> Vec<Employee> {
    use ExperienceLevel::*;
    vec![
        employee("emp1", "Alice Johnson", &["python", "django", "postgresql"], Senior, 40.0),
        employee("emp2", "Bob Smith", &["javascript", "react", "node.js"], Mid, 35.0),
        employee(
            "emp3",
            "Carol Davis",
            &["python", "machine_learning", "data_analysis"],
            Expert,
            30.0,
        ),
        employee("emp4", "David Wilson", &["html", "css", "javascript"], Junior, 40.0),
        employee(
            "emp5",
            "Eva Brown",
            &["project_management", "agile", "documentation"],
            Senior,
            35.0,
        ),
    ]
}

/// Six-task backlog.
pub fn sample_tasks() -> Vec<Task> {
    use Complexity::*;
    vec![
        task(
            "task1",
            "Backend API Development",
            "Develop REST API endpoints",
            &["python", "django"],
            16.0,
            Priority::High,
            Moderate,
        ),
        task(
            "task2",
            "Frontend Dashboard",
            "Create React dashboard",
            &["javascript", "react"],
            20.0,
            Priority::High,
            Moderate,
        ),
        task(
            "task3",
            "Database Schema Design",
            "Design and implement database schema",
            &["postgresql", "database_design"],
            12.0,
            Priority::Medium,
            Complex,
        ),
        task(
            "task4",
            "Machine Learning Model",
            "Implement ML prediction model",
            &["python", "machine_learning"],
            25.0,
            Priority::Critical,
            Expert,
        ),
        task(
            "task5",
            "UI/UX Design",
            "Design user interface mockups",
            &["html", "css"],
            8.0,
            Priority::Low,
            Simple,
        ),
        task(
            "task6",
            "Project Documentation",
            "Write project documentation",
            &["documentation", "project_management"],
            10.0,
            Priority::Medium,
            Simple,
        ),
    ]
}

/// Eight-person team for backlogs converted from plan steps.
///
/// Skill tags line up with [`infer_skills`](crate::planning::infer_skills).
pub fn sample_team() -> Vec<Employee> {
    use ExperienceLevel::*;
    vec![
        employee(
            "dev1",
            "Alice Johnson",
            &["python", "django", "postgresql", "programming"],
            Senior,
            40.0,
        ),
        employee(
            "dev2",
            "Bob Smith",
            &["javascript", "react", "node.js", "programming"],
            Mid,
            35.0,
        ),
        employee(
            "dev3",
            "Carol Davis",
            &["python", "machine_learning", "data_analysis", "programming"],
            Expert,
            30.0,
        ),
        employee("dev4", "David Wilson", &["html", "css", "javascript", "frontend"], Junior, 40.0),
        employee(
            "dev5",
            "Eva Brown",
            &["project_management", "agile", "documentation"],
            Senior,
            35.0,
        ),
        employee("dev6", "Frank Miller", &["java", "spring", "database", "programming"], Mid, 40.0),
        employee("dev7", "Grace Lee", &["devops", "docker", "aws", "testing"], Senior, 30.0),
        employee("dev8", "Henry Chen", &["c++", "programming", "testing"], Mid, 35.0),
    ]
}
