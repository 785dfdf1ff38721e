//! Recalculation schedule for the page script
//!
//! Layout can keep settling after the first paint (web fonts, scrollbars), so a
//! recalculation runs on the next frame, the frame after, and once more after a
//! short delay. A newer request supersedes any run still pending.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecalcStep {
    NextFrame,
    Delay { ms: u32 },
}

pub(crate) const RECALC_PLAN: [RecalcStep; 3] = [
    RecalcStep::NextFrame,
    RecalcStep::NextFrame,
    RecalcStep::Delay { ms: 60 },
];

/// Emit `scheduleRecalc(run)` as JavaScript, nesting one callback per step.
///
/// Each callback checks the generation captured when it was scheduled and
/// bails out once a later call has bumped it.
pub(crate) fn recalc_script(plan: &[RecalcStep]) -> String {
    let mut body = String::new();
    let mut closers = Vec::with_capacity(plan.len());

    for step in plan {
        match step {
            RecalcStep::NextFrame => {
                body.push_str("requestAnimationFrame(() => { if (g !== recalcGen) return; run(); ");
                closers.push("});".to_string());
            }
            RecalcStep::Delay { ms } => {
                body.push_str("setTimeout(() => { if (g !== recalcGen) return; run(); ");
                closers.push(format!("}}, {ms});"));
            }
        }
    }
    for closer in closers.iter().rev() {
        body.push_str(closer);
        body.push(' ');
    }

    let mut out = String::new();
    let _ = writeln!(out, "let recalcGen = 0;");
    let _ = writeln!(out, "function scheduleRecalc(run) {{");
    let _ = writeln!(out, "  const g = ++recalcGen;");
    let _ = writeln!(out, "  {}", body.trim_end());
    let _ = writeln!(out, "}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_is_two_frames_then_delay() {
        assert_eq!(RECALC_PLAN.len(), 3);
        assert_eq!(RECALC_PLAN[2], RecalcStep::Delay { ms: 60 });
    }

    #[test]
    fn script_nests_every_step() {
        let js = recalc_script(&RECALC_PLAN);
        assert_eq!(js.matches("requestAnimationFrame(").count(), 2);
        assert_eq!(js.matches("setTimeout(").count(), 1);
        assert!(js.contains("}, 60);"));
        assert_eq!(js.matches("if (g !== recalcGen) return;").count(), 3);
        assert_eq!(js.matches('{').count(), js.matches('}').count());
    }

    #[test]
    fn empty_plan_still_defines_function() {
        let js = recalc_script(&[]);
        assert!(js.contains("function scheduleRecalc(run)"));
        assert!(!js.contains("requestAnimationFrame"));
    }
}
