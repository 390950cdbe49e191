use crate::services::app::reporter::{LogReporter, Reporter};
use crate::test_utils::{init_test_logger, MemoryReporter};

#[test]
fn test_reporter_is_object_safe() {
    init_test_logger();
    let memory = MemoryReporter::default();
    let reporters: Vec<&dyn Reporter> = vec![&LogReporter, &memory];

    for reporter in reporters {
        reporter.report(log::Level::Info, "Student: Gurney_Halleck");
    }

    let messages = memory.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        (log::Level::Info, "Student: Gurney_Halleck".to_string())
    );
}

#[test]
fn test_memory_reporter_contains() {
    let memory = MemoryReporter::default();
    memory.report(log::Level::Warn, "Unwanted file found: A_B/.idea");

    assert!(memory.contains(log::Level::Warn, ".idea"));
    assert!(!memory.contains(log::Level::Info, ".idea"));
}
