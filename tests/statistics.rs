mod common;

#[cfg(test)]
mod tests {
    use super::common::{label, now, project, sample_source, MockSource};
    use chrono::TimeDelta;
    use test_context::{test_context, AsyncTestContext, TestContext};
    use todoist_report::libs::completed::{completed_task_statistics, window_start, CompletedStats};
    use todoist_report::libs::due_soon::{due_soon_statistics, window_end, DueSoonStats};
    use todoist_report::libs::overdue::{overdue_statistics, OverdueStats};
    use todoist_report::libs::productivity::{productivity_recommendation, Recommendation};
    use todoist_report::libs::task::Task;

    struct StatisticsTestContext {
        source: MockSource,
    }

    impl TestContext for StatisticsTestContext {
        fn setup() -> Self {
            StatisticsTestContext {
                source: sample_source(),
            }
        }
    }

    /// Same snapshot for the fragment tests, which run on the async runtime.
    struct FragmentTestContext {
        source: MockSource,
    }

    impl AsyncTestContext for FragmentTestContext {
        async fn setup() -> Self {
            FragmentTestContext {
                source: sample_source(),
            }
        }
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_completed_counts_window_and_projects(ctx: &mut StatisticsTestContext) {
        let stats = CompletedStats::compute(ctx.source.completed.clone(), &ctx.source.projects, None, 7, now());

        assert_eq!(stats.total, 4);
        assert_eq!(
            stats.per_project,
            vec![
                ("Work".to_string(), 2),
                ("Home".to_string(), 1),
                ("(no project)".to_string(), 1),
            ]
        );
        let sum: usize = stats.per_project.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, stats.total);
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_completed_render_layout(ctx: &mut StatisticsTestContext) {
        let stats = CompletedStats::compute(ctx.source.completed.clone(), &ctx.source.projects, None, 7, now());

        let expected = "Completed task statistics for the last 7 days:\n\
                        — Total tasks completed: 4\n\
                        — By project:\n\
                        \x20 Project 'Work': 2 task(s)\n\
                        \x20 Project 'Home': 1 task(s)\n\
                        \x20 Project '(no project)': 1 task(s)\n\
                        \n\
                        — Completed tasks:\n\
                        \x20 - Write invoice (completed: 2024-05-09T10:00:00Z)\n\
                        \x20 - Call supplier (completed: 2024-05-08T09:30:00Z)\n\
                        \x20 - Fix the sink (completed: 2024-05-07T18:00:00Z)\n\
                        \x20 - Read a book (completed: 2024-05-09T21:00:00Z)\n";
        assert_eq!(stats.render(), expected);
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_completed_project_filter(ctx: &mut StatisticsTestContext) {
        let stats =
            CompletedStats::compute(ctx.source.completed.clone(), &ctx.source.projects, Some("Home"), 7, now());

        assert_eq!(stats.total, 1);
        assert_eq!(stats.per_project, vec![("Home".to_string(), 1)]);
        assert_eq!(stats.tasks[0].content, "Fix the sink");
    }

    #[test]
    fn test_completed_empty_window_renders_two_lines() {
        let stats = CompletedStats::compute(Vec::new(), &[], None, 14, now());

        assert_eq!(
            stats.render(),
            "Completed task statistics for the last 14 days:\n— Total tasks completed: 0\n"
        );
    }

    #[test]
    fn test_completed_outside_window_is_dropped() {
        let projects = vec![project("p1", "P1"), project("p2", "P2")];
        let tasks = vec![
            Task::new("1", "A").with_project("p1").with_completed_at("2024-05-09T12:00:00Z"),
            Task::new("2", "B").with_project("p2").with_completed_at("2024-04-30T12:00:00Z"),
        ];

        let stats = CompletedStats::compute(tasks, &projects, None, 7, now());
        assert_eq!(stats.total, 1);
        assert_eq!(stats.per_project, vec![("P1".to_string(), 1)]);
        assert_eq!(stats.tasks[0].content, "A");
    }

    #[test]
    fn test_long_overdue_task() {
        let far_future = now() + TimeDelta::days(3650);
        let tasks = vec![Task::new("1", "X").with_due("2020-01-01")];

        let stats = OverdueStats::compute(tasks, &[], &[], None, None, far_future);
        assert_eq!(stats.overdue.len(), 1);
        assert_eq!(stats.overdue[0].due, "2020-01-01");
        assert!(stats.render().contains("  - X (deadline was: 2020-01-01)"));
    }

    #[test]
    fn test_completed_ties_keep_first_seen_order() {
        let projects = vec![project("p1", "Work"), project("p2", "Home")];
        let tasks = vec![
            Task::new("1", "a").with_project("p2").with_completed_at("2024-05-09T10:00:00Z"),
            Task::new("2", "b").with_project("p1").with_completed_at("2024-05-09T11:00:00Z"),
        ];

        let stats = CompletedStats::compute(tasks, &projects, None, 7, now());
        assert_eq!(stats.per_project, vec![("Home".to_string(), 1), ("Work".to_string(), 1)]);
    }

    #[test]
    fn test_completed_excludes_unparseable_completion() {
        let tasks = vec![
            Task::new("1", "fine").with_completed_at("2024-05-09T10:00:00Z"),
            Task::new("2", "garbled").with_completed_at("yesterday"),
            Task::new("3", "missing"),
        ];

        let stats = CompletedStats::compute(tasks, &[], None, 7, now());
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_window_bounds_saturate() {
        assert_eq!(window_start(now(), 7), now() - TimeDelta::days(7));
        assert_eq!(window_end(now(), 3), now() + TimeDelta::days(3));
        assert!(window_start(now(), u32::MAX) < now());
        assert!(window_end(now(), u32::MAX) > now());
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_overdue_selection_and_render(ctx: &mut StatisticsTestContext) {
        let stats = OverdueStats::compute(ctx.source.active.clone(), &[], &[], None, None, now());

        assert_eq!(stats.active_tasks, 6);
        assert_eq!(
            stats.render(),
            "— Overdue tasks: 2\n\
             \n\
             — Overdue task list:\n\
             \x20 - Pay rent (deadline was: 2024-05-01)\n\
             \x20 - Standup notes (deadline was: 2024-05-10T11:59:59Z)\n"
        );
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_overdue_with_filters(ctx: &mut StatisticsTestContext) {
        let by_label = OverdueStats::compute(
            ctx.source.active.clone(),
            &ctx.source.projects,
            &ctx.source.labels,
            None,
            Some("urgent"),
            now(),
        );
        assert_eq!(by_label.overdue.len(), 1);
        assert_eq!(by_label.overdue[0].content, "Pay rent");

        let by_both = OverdueStats::compute(
            ctx.source.active.clone(),
            &ctx.source.projects,
            &ctx.source.labels,
            Some("Work"),
            Some("urgent"),
            now(),
        );
        assert!(by_both.overdue.is_empty());
        assert_eq!(by_both.render(), "— Overdue tasks: 0\n");
    }

    #[test]
    fn test_overdue_lists_task_with_repeated_label_once() {
        let labels = vec![label("s", "support")];
        let tasks = vec![Task::new("1", "Reply to customer").with_labels(&["s", "s"]).with_due("2024-05-01")];

        let stats = OverdueStats::compute(tasks, &[], &labels, None, Some("support"), now());
        assert_eq!(stats.overdue.len(), 1);
    }

    #[test]
    fn test_overdue_skips_completed_tasks() {
        let mut done = Task::new("1", "done already").with_due("2024-05-01");
        done.checked = true;

        let stats = OverdueStats::compute(vec![done], &[], &[], None, None, now());
        assert!(stats.overdue.is_empty());
    }

    #[test]
    fn test_empty_snapshot_reports_no_active_tasks() {
        let overdue = OverdueStats::compute(Vec::new(), &[], &[], None, None, now());
        let due_soon = DueSoonStats::compute(Vec::new(), &[], &[], 3, None, None, now());

        assert_eq!(overdue.render(), "— No active tasks.\n");
        assert_eq!(due_soon.render(), "— No active tasks.\n");
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_due_soon_selection_and_render(ctx: &mut StatisticsTestContext) {
        let stats = DueSoonStats::compute(ctx.source.active.clone(), &[], &[], 3, None, None, now());

        assert_eq!(
            stats.render(),
            "— Tasks due within the next 3 days: 1\n\
             \n\
             — Tasks with the nearest deadline:\n\
             \x20 - Send report (deadline: 2024-05-11)\n"
        );
    }

    #[test]
    fn test_due_soon_window_is_inclusive() {
        let tasks = vec![
            Task::new("1", "right now").with_due("2024-05-10T12:00:00Z"),
            Task::new("2", "last second").with_due("2024-05-13T12:00:00Z"),
            Task::new("3", "one second late").with_due("2024-05-13T12:00:01Z"),
        ];

        let stats = DueSoonStats::compute(tasks, &[], &[], 3, None, None, now());
        let contents: Vec<&str> = stats.due_soon.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["right now", "last second"]);
    }

    #[test_context(StatisticsTestContext)]
    #[test]
    fn test_overdue_and_due_soon_are_disjoint(ctx: &mut StatisticsTestContext) {
        let mut tasks = ctx.source.active.clone();
        tasks.push(Task::new("b", "boundary").with_due("2024-05-10T12:00:00Z"));

        let overdue = OverdueStats::compute(tasks.clone(), &[], &[], None, None, now());
        let due_soon = DueSoonStats::compute(tasks, &[], &[], 30, None, None, now());

        for entry in &overdue.overdue {
            assert!(!due_soon.due_soon.contains(entry));
        }
        assert!(due_soon.due_soon.iter().any(|e| e.content == "boundary"));
    }

    #[test]
    fn test_recommendation_variants() {
        let idle = Recommendation { completed: 0 }.render();
        assert_eq!(idle.lines().count(), 2);
        assert!(idle.starts_with("Recommendation:"));
        assert!(idle.contains("No tasks have been completed yet"));

        let busy = Recommendation { completed: 3 }.render();
        assert_eq!(busy.lines().count(), 1);
        assert!(busy.ends_with('\n'));
    }

    #[test_context(FragmentTestContext)]
    #[tokio::test]
    async fn test_completed_fragment_fetches_tasks_and_projects(ctx: &mut FragmentTestContext) {
        let fragment = completed_task_statistics(&ctx.source, 7, None, now()).await.unwrap();

        assert!(fragment.contains("— Total tasks completed: 4"));
        assert_eq!(ctx.source.calls(), vec!["completed", "projects"]);
    }

    #[test_context(FragmentTestContext)]
    #[tokio::test]
    async fn test_active_fragments_fetch_only_needed_dimensions(ctx: &mut FragmentTestContext) {
        overdue_statistics(&ctx.source, None, None, now()).await.unwrap();
        assert_eq!(ctx.source.calls(), vec!["active"]);

        due_soon_statistics(&ctx.source, 3, None, Some("urgent"), now()).await.unwrap();
        assert_eq!(ctx.source.calls(), vec!["active", "active", "labels"]);
    }

    #[tokio::test]
    async fn test_productivity_fragment_without_completions() {
        let source = MockSource::default();
        let fragment = productivity_recommendation(&source, 7, None, now()).await.unwrap();

        assert_eq!(fragment, Recommendation { completed: 0 }.render());
        assert_eq!(source.calls(), vec!["completed"]);
    }

    #[tokio::test]
    async fn test_fragment_propagates_remote_failure() {
        let source = MockSource {
            failing_status: Some(503),
            ..Default::default()
        };

        let err = overdue_statistics(&source, None, None, now()).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
