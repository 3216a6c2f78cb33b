/// Session lifecycle tests: ordering of the normalize → styles → evaluate
/// chain, last-write-wins, and cleanup on unmount.
use crate::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every evaluation request; always succeeds.
struct RecordingEvaluator {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingEvaluator {
    fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: log.clone() }, log)
    }
}

impl LiveEvaluator for RecordingEvaluator {
    fn evaluate(
        &mut self,
        code: &str,
        scope: &[ScopeBinding],
        _theme: &EditorTheme,
    ) -> Result<RenderedPreview, EvalFailure> {
        assert!(!scope.is_empty());
        self.log.borrow_mut().push(code.to_owned());
        Ok(RenderedPreview {
            markup: format!("<preview>{}</preview>", code.len()),
        })
    }
}

/// Fails on code containing the marker string.
struct FlakyEvaluator;

impl LiveEvaluator for FlakyEvaluator {
    fn evaluate(
        &mut self,
        code: &str,
        _scope: &[ScopeBinding],
        _theme: &EditorTheme,
    ) -> Result<RenderedPreview, EvalFailure> {
        if code.contains("explode") {
            Err(EvalFailure::Runtime {
                message: "explode is not defined".into(),
            })
        } else {
            Ok(RenderedPreview {
                markup: "<ok/>".into(),
            })
        }
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use sasta_styles::PreviewTheme;

    #[test]
    fn test_new_session_is_idle() {
        let (evaluator, log) = RecordingEvaluator::new();
        let session = PlaygroundSession::new(evaluator);
        assert_eq!(session.state(), PreviewState::Idle);
        assert!(session.module().is_none());
        assert_eq!(session.style_container_count(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_code_runs_full_chain() {
        let (evaluator, log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("function Demo() { return <div>Hi</div>; }");

        assert_eq!(session.state(), PreviewState::Rendered);
        let module = session.module().unwrap();
        assert!(module.code.ends_with("render(<Demo />)"));
        // The evaluator received exactly the committed module text.
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0], module.code);
        // Styles were injected as part of the same pass.
        assert_eq!(session.style_container_count(), 1);
    }

    #[test]
    fn test_each_change_supersedes_prior_result() {
        let (evaluator, log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("<div>A</div>");
        session.set_code("<div>B</div>");

        assert_eq!(log.borrow().len(), 2);
        assert_eq!(session.module().unwrap().code, "render(<div>B</div>)");
        // Still exactly one style container after repeated passes.
        assert_eq!(session.style_container_count(), 1);
    }

    #[test]
    fn test_theme_change_reinjects_styles_and_reevaluates() {
        let (evaluator, log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("<div>A</div>");
        let light_css = session.injected_css();

        session.set_theme(PreviewTheme::Dark);
        assert_ne!(session.injected_css(), light_css);
        assert_eq!(session.style_container_count(), 1);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_custom_styles_appear_in_injected_css() {
        let (evaluator, _log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("<div/>");
        session.set_custom_styles(".hero { font-size: 3rem; }");
        assert!(session.injected_css().contains(".hero"));
        assert_eq!(session.style_container_count(), 1);
    }

    #[test]
    fn test_viewport_change_does_not_reevaluate() {
        let (evaluator, log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("<div/>");
        session.set_viewport_width("768px");
        assert_eq!(session.viewport_width(), "768px");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_evaluator_failure_is_contained() {
        let mut session = PlaygroundSession::new(FlakyEvaluator);
        session.set_code("const Demo = () => <div>{explode()}</div>;");

        assert_eq!(session.state(), PreviewState::Errored);
        match session.output().unwrap() {
            PreviewOutput::ErrorBanner { message } => {
                assert!(message.contains("explode is not defined"));
            }
            other => panic!("expected error banner, got {:?}", other),
        }

        // A good edit recovers without any residue.
        session.set_code("<div>ok</div>");
        assert_eq!(session.state(), PreviewState::Rendered);
    }

    #[test]
    fn test_load_template_by_name() {
        let (evaluator, _log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        assert!(session.load_template("Bootstrap Grid"));
        assert!(session.code().contains("GridDemo"));
        assert_eq!(session.state(), PreviewState::Rendered);
        assert!(!session.load_template("No Such Template"));
    }

    #[test]
    fn test_load_record_and_save_roundtrip() {
        let (evaluator, _log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);

        let record = ComponentRecord {
            id: "cmp-1".into(),
            name: "Hero".into(),
            description: String::new(),
            category: "sections".into(),
            code: "function Hero() { return <header>Big</header>; }".into(),
            styles: "header { padding: 4rem; }".into(),
            preview: String::new(),
            tags: Vec::new(),
            deleted: false,
        };
        session.load_record(&record);
        assert_eq!(session.state(), PreviewState::Rendered);
        assert!(session.injected_css().contains("padding: 4rem;"));

        let saved = Rc::new(RefCell::new(None));
        let saved_clone = saved.clone();
        session.on_save(Box::new(move |payload| {
            *saved_clone.borrow_mut() = Some(payload.clone());
        }));

        session.set_custom_styles("header { padding: 2rem; }");
        let payload = session.save();
        assert_eq!(payload.code, record.code);
        assert_eq!(payload.styles, "header { padding: 2rem; }");
        assert_eq!(saved.borrow().as_ref(), Some(&payload));
    }

    #[test]
    fn test_unmount_removes_injected_styles() {
        let (evaluator, _log) = RecordingEvaluator::new();
        let mut session = PlaygroundSession::new(evaluator);
        session.set_code("<div/>");
        assert_eq!(session.style_container_count(), 1);

        session.unmount();
        assert_eq!(session.style_container_count(), 0);
        assert_eq!(session.state(), PreviewState::Idle);
        assert!(session.module().is_none());
    }

    #[test]
    fn test_with_snippet_runs_immediately() {
        let (evaluator, log) = RecordingEvaluator::new();
        let session =
            PlaygroundSession::with_snippet(evaluator, "<div>boot</div>", ".x { color: red; }");
        assert_eq!(session.state(), PreviewState::Rendered);
        assert_eq!(log.borrow().len(), 1);
        assert!(session.injected_css().contains(".x { color: red; }"));
    }
}
