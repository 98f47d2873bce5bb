//! Quiz session state machine.
//!
//! ```text
//! Idle --start--> Active --(max questions reached | end)--> Idle
//! ```
//!
//! Answering and advancing are separate steps: [`QuizSession::submit_answer`]
//! scores the current question and the caller then asks for
//! [`QuizSession::next_question`].

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{QuizError, Result};
use crate::language::{voice_for, LanguagePair};
use crate::store::VocabularyStore;
use crate::synth::{AudioRequest, Synthesizer};
use crate::types::{
    AnswerOutcome, LanguageSettings, Mode, PassOutcome, Question, QuizSummary, SessionStatus,
    Side, Turn, VocabularyEntry,
};
use crate::usage::{UsageMeter, UsageSnapshot};

pub const DEFAULT_MAX_QUESTIONS: u32 = 50;
pub const DEFAULT_MAX_PASSES: u32 = 3;

/// One player's game.
pub struct QuizSession {
    store: VocabularyStore,
    languages: LanguagePair,
    audio_enabled: bool,
    meter: Arc<UsageMeter>,
    synthesizer: Option<Arc<dyn Synthesizer>>,
    rng: StdRng,

    mode: Mode,
    current: Option<VocabularyEntry>,
    score: i64,
    questions_asked: u32,
    max_questions: u32,
    passes_left: u32,
    max_passes: u32,
    active: bool,
    solution_visible: bool,
}

impl QuizSession {
    /// Create an idle session with no vocabulary.
    ///
    /// Without a synthesizer audio stays disabled whatever the languages.
    pub fn new(meter: Arc<UsageMeter>, synthesizer: Option<Arc<dyn Synthesizer>>) -> Self {
        let languages = LanguagePair::default();
        let audio_enabled = languages.speakable() && synthesizer.is_some();

        Self {
            store: VocabularyStore::default(),
            languages,
            audio_enabled,
            meter,
            synthesizer,
            rng: StdRng::from_entropy(),
            mode: Mode::default(),
            current: None,
            score: 0,
            questions_asked: 0,
            max_questions: DEFAULT_MAX_QUESTIONS,
            passes_left: DEFAULT_MAX_PASSES,
            max_passes: DEFAULT_MAX_PASSES,
            active: false,
            solution_visible: false,
        }
    }

    /// Use a seeded generator for question selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the vocabulary wholesale; on error the old one stays.
    pub fn load_vocabulary<I, A, B>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let store = VocabularyStore::build(rows)?;
        let count = store.len();
        self.store = store;
        tracing::info!(count, "Vocabulary loaded");
        Ok(count)
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.store
    }

    /// Set the column languages and recompute audio availability.
    pub fn set_languages(&mut self, first: &str, second: &str) -> LanguageSettings {
        self.languages = LanguagePair::new(first, second);
        self.audio_enabled = self.languages.speakable() && self.synthesizer.is_some();

        LanguageSettings {
            first_language: self.languages.first.clone(),
            second_language: self.languages.second.clone(),
            audio_enabled: self.audio_enabled,
            usage_info: self.usage_if_audio(),
        }
    }

    /// Begin a new game, discarding any previous one, and serve the first question.
    pub fn start(&mut self, mode: Mode, max_questions: u32, max_passes: u32) -> Result<Turn> {
        if self.store.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }

        self.mode = mode;
        self.current = None;
        self.score = 0;
        self.questions_asked = 0;
        self.max_questions = max_questions;
        self.max_passes = max_passes;
        self.passes_left = max_passes;
        self.active = true;
        self.solution_visible = false;

        tracing::info!(
            mode = mode.as_str(),
            max_questions,
            max_passes,
            "Game started"
        );
        self.next_question()
    }

    /// Serve a random question, or finish once the question budget is spent.
    pub fn next_question(&mut self) -> Result<Turn> {
        if !self.active || self.questions_asked >= self.max_questions {
            return self.end().map(Turn::Finished);
        }

        let entry = self
            .store
            .choose(&mut self.rng)
            .cloned()
            .ok_or(QuizError::EmptyVocabulary)?;
        self.questions_asked += 1;
        self.solution_visible = false;

        let text = entry.display(self.question_side()).to_string();
        let prompt = match self.mode {
            Mode::SourceToTarget => format!("Translate to second language:\n\n'{}'", text),
            Mode::TargetToSource => format!("Translate to first language:\n\n'{}'", text),
        };
        self.current = Some(entry);

        Ok(Turn::Question(Question {
            text,
            prompt,
            question_type: self.mode,
            score: self.score,
            questions_asked: self.questions_asked,
            max_questions: self.max_questions,
            passes_left: self.passes_left,
            audio_enabled: self.audio_enabled,
            solution_visible: false,
            usage_info: self.usage_if_audio(),
        }))
    }

    /// Show the answer side of the current question.
    pub fn reveal_solution(&mut self) -> Result<String> {
        let solution = self
            .current_question()?
            .display(self.answer_side())
            .to_string();
        self.solution_visible = true;
        Ok(solution)
    }

    pub fn hide_solution(&mut self) {
        self.solution_visible = false;
    }

    /// Score a typed answer against every variant of the answer side.
    ///
    /// Does not advance; call [`next_question`](Self::next_question) afterwards.
    pub fn submit_answer(&mut self, typed: &str) -> Result<AnswerOutcome> {
        let side = self.answer_side();
        let entry = self.current_question()?;
        let correct = entry.accepts(side, typed);
        let display = entry.display(side).to_string();

        if correct {
            self.score += 1;
            Ok(AnswerOutcome {
                correct: true,
                message: "CORRECT!".to_string(),
                correct_answer: None,
                score: self.score,
                solution_visible: self.solution_visible,
            })
        } else {
            self.score -= 1;
            self.solution_visible = true;
            Ok(AnswerOutcome {
                correct: false,
                message: format!("WRONG!\nCorrect answer: {}", display),
                correct_answer: Some(display),
                score: self.score,
                solution_visible: true,
            })
        }
    }

    /// Skip the current question, spending one pass and revealing the answer.
    pub fn pass_question(&mut self) -> Result<PassOutcome> {
        if self.passes_left == 0 {
            return Err(QuizError::NoPassesLeft);
        }
        if !self.active {
            return Err(QuizError::NoActiveGame);
        }

        let solution = self
            .current_question()?
            .display(self.answer_side())
            .to_string();
        self.passes_left -= 1;
        self.solution_visible = true;

        Ok(PassOutcome {
            message: "Question skipped".to_string(),
            passes_left: self.passes_left,
            solution,
            solution_visible: true,
        })
    }

    /// Prepare audio for the visible word.
    ///
    /// Speaks the answer side once the solution is visible, the question
    /// side otherwise. The returned request runs independently of the
    /// session.
    pub fn request_audio(&self) -> Result<AudioRequest> {
        let unavailable = || QuizError::AudioUnavailable("Audio not available".to_string());

        if !self.active || !self.audio_enabled {
            return Err(unavailable());
        }
        let entry = self.current.as_ref().ok_or_else(unavailable)?;
        let synthesizer = self.synthesizer.clone().ok_or_else(unavailable)?;

        let side = if self.solution_visible {
            self.answer_side()
        } else {
            self.question_side()
        };
        let language = match side {
            Side::Source => self.languages.first.clone(),
            Side::Target => self.languages.second.clone(),
        };
        let text = entry.main(side).to_string();

        tracing::debug!(
            solution = self.solution_visible,
            "Speaking '{}' in {}",
            text,
            language
        );

        Ok(AudioRequest::new(
            text,
            language.clone(),
            voice_for(&language),
            Arc::clone(&self.meter),
            synthesizer,
        ))
    }

    /// Finish the game and report the score.
    pub fn end(&mut self) -> Result<QuizSummary> {
        if !self.active {
            return Err(QuizError::NoActiveGame);
        }
        self.active = false;

        let percentage = if self.questions_asked > 0 {
            self.score as f64 / self.questions_asked as f64 * 100.0
        } else {
            0.0
        };
        // Ties round to even, so the number and the message always agree.
        let rounded = format!("{:.1}", percentage);
        let percentage = rounded.parse::<f64>().unwrap_or(percentage);

        tracing::info!(
            score = self.score,
            questions_asked = self.questions_asked,
            "Game ended"
        );

        Ok(QuizSummary {
            final_score: self.score,
            questions_asked: self.questions_asked,
            percentage,
            message: format!(
                "GAME ENDED! Score: {}/{} ({}%)",
                self.score, self.questions_asked, rounded
            ),
            usage_info: self.usage_if_audio(),
        })
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            game_active: self.active,
            vocabulary_count: self.store.len(),
            score: self.score,
            questions_asked: self.questions_asked,
            passes_left: self.passes_left,
            max_passes: self.max_passes,
            audio_enabled: self.audio_enabled,
            usage_info: self.usage_if_audio(),
        }
    }

    pub fn usage_info(&self) -> UsageSnapshot {
        self.meter.snapshot()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn passes_left(&self) -> u32 {
        self.passes_left
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn current_question(&self) -> Result<&VocabularyEntry> {
        match (&self.current, self.active) {
            (Some(entry), true) => Ok(entry),
            _ => Err(QuizError::NoActiveQuestion),
        }
    }

    fn question_side(&self) -> Side {
        match self.mode {
            Mode::SourceToTarget => Side::Source,
            Mode::TargetToSource => Side::Target,
        }
    }

    fn answer_side(&self) -> Side {
        match self.mode {
            Mode::SourceToTarget => Side::Target,
            Mode::TargetToSource => Side::Source,
        }
    }

    fn usage_if_audio(&self) -> Option<UsageSnapshot> {
        self.audio_enabled.then(|| self.meter.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{MockMode, MockSynthesizer};
    use crate::usage::tests::ManualClock;
    use crate::usage::MemoryUsageStore;
    use pretty_assertions::assert_eq;

    fn meter(limit: u64) -> Arc<UsageMeter> {
        Arc::new(UsageMeter::with_clock(
            MemoryUsageStore::new(),
            limit,
            ManualClock::new(2025, 6, 1),
        ))
    }

    fn session_with(rows: &[(&str, &str)]) -> QuizSession {
        let mut session = QuizSession::new(meter(1000), None).with_seed(1);
        session.load_vocabulary(rows.iter().copied()).unwrap();
        session
    }

    fn audio_session(synth: Arc<MockSynthesizer>, limit: u64) -> QuizSession {
        let mut session = QuizSession::new(meter(limit), Some(synth)).with_seed(1);
        session.load_vocabulary([("go/went", "andare")]).unwrap();
        session.set_languages("English", "Italian");
        session
    }

    fn question(turn: Turn) -> Question {
        match turn {
            Turn::Question(q) => q,
            Turn::Finished(s) => panic!("expected a question, got {:?}", s),
        }
    }

    fn summary(turn: Turn) -> QuizSummary {
        match turn {
            Turn::Finished(s) => s,
            Turn::Question(q) => panic!("expected a summary, got {:?}", q),
        }
    }

    #[test]
    fn start_requires_vocabulary() {
        let mut session = QuizSession::new(meter(1000), None);
        assert_eq!(
            session.start(Mode::SourceToTarget, 5, 1).unwrap_err(),
            QuizError::EmptyVocabulary
        );
        assert!(!session.is_active());
    }

    #[test]
    fn single_question_round_trip() {
        let mut session = session_with(&[("cat", "gatto")]);

        let q = question(session.start(Mode::SourceToTarget, 1, 0).unwrap());
        assert_eq!(q.text, "cat");
        assert_eq!(q.prompt, "Translate to second language:\n\n'cat'");
        assert_eq!(q.questions_asked, 1);

        let outcome = session.submit_answer("gatto").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);

        let s = summary(session.next_question().unwrap());
        assert_eq!(s.final_score, 1);
        assert_eq!(s.questions_asked, 1);
        assert_eq!(s.percentage, 100.0);
        assert_eq!(s.message, "GAME ENDED! Score: 1/1 (100.0%)");
        assert!(!session.is_active());
    }

    #[test]
    fn answer_ignores_case_and_whitespace() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 3, 0).unwrap();
        assert!(session.submit_answer(" Gatto ").unwrap().correct);
    }

    #[test]
    fn any_variant_is_accepted() {
        let mut session = session_with(&[("go/went", "andare")]);
        session.start(Mode::TargetToSource, 3, 0).unwrap();
        assert!(session.submit_answer("WENT").unwrap().correct);
        assert!(session.submit_answer("go").unwrap().correct);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn reverse_mode_asks_second_column() {
        let mut session = session_with(&[("cat", "gatto")]);
        let q = question(session.start(Mode::TargetToSource, 3, 0).unwrap());
        assert_eq!(q.text, "gatto");
        assert_eq!(q.prompt, "Translate to first language:\n\n'gatto'");
        assert!(!session.submit_answer("gatto").unwrap().correct);
        assert_eq!(session.reveal_solution().unwrap(), "cat");
    }

    #[test]
    fn wrong_answer_reveals_and_goes_negative() {
        let mut session = session_with(&[("cat", "gatto, micio")]);
        session.start(Mode::SourceToTarget, 3, 0).unwrap();

        let outcome = session.submit_answer("cane").unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                correct: false,
                message: "WRONG!\nCorrect answer: gatto, micio".to_string(),
                correct_answer: Some("gatto, micio".to_string()),
                score: -1,
                solution_visible: true,
            }
        );
        assert!(session.solution_visible());
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn next_question_hides_solution() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 3, 0).unwrap();
        session.reveal_solution().unwrap();
        assert!(session.solution_visible());

        let q = question(session.next_question().unwrap());
        assert!(!q.solution_visible);
        assert!(!session.solution_visible());
        assert_eq!(q.questions_asked, 2);
    }

    #[test]
    fn reveal_and_hide() {
        let mut session = session_with(&[("cat", "gatto")]);
        assert_eq!(session.reveal_solution().unwrap_err(), QuizError::NoActiveQuestion);

        session.start(Mode::SourceToTarget, 3, 0).unwrap();
        assert_eq!(session.reveal_solution().unwrap(), "gatto");
        session.hide_solution();
        assert!(!session.solution_visible());
    }

    #[test]
    fn answer_without_game_fails() {
        let mut session = session_with(&[("cat", "gatto")]);
        assert_eq!(session.submit_answer("gatto").unwrap_err(), QuizError::NoActiveQuestion);

        session.start(Mode::SourceToTarget, 1, 0).unwrap();
        session.end().unwrap();
        assert_eq!(session.submit_answer("gatto").unwrap_err(), QuizError::NoActiveQuestion);
    }

    #[test]
    fn pass_without_budget_changes_nothing() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 3, 0).unwrap();
        session.submit_answer("gatto").unwrap();

        assert_eq!(session.pass_question().unwrap_err(), QuizError::NoPassesLeft);
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn pass_spends_budget_and_reveals() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 3, 2).unwrap();

        let outcome = session.pass_question().unwrap();
        assert_eq!(outcome.passes_left, 1);
        assert_eq!(outcome.solution, "gatto");
        assert!(session.solution_visible());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn pass_checks_budget_before_activity() {
        let mut session = session_with(&[("cat", "gatto")]);
        assert_eq!(session.pass_question().unwrap_err(), QuizError::NoActiveGame);

        session.start(Mode::SourceToTarget, 1, 0).unwrap();
        session.end().unwrap();
        assert_eq!(session.pass_question().unwrap_err(), QuizError::NoPassesLeft);
    }

    #[test]
    fn end_twice_fails() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 5, 0).unwrap();
        assert!(session.end().is_ok());
        assert_eq!(session.end().unwrap_err(), QuizError::NoActiveGame);
        assert_eq!(session.next_question().unwrap_err(), QuizError::NoActiveGame);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 3, 0).unwrap();
        session.submit_answer("gatto").unwrap();
        session.next_question().unwrap();
        session.submit_answer("gatto").unwrap();
        session.next_question().unwrap();
        session.submit_answer("nope").unwrap();

        let s = summary(session.next_question().unwrap());
        assert_eq!(s.final_score, 1);
        assert_eq!(s.questions_asked, 3);
        assert_eq!(s.percentage, 33.3);
        assert_eq!(s.message, "GAME ENDED! Score: 1/3 (33.3%)");
    }

    #[test]
    fn percentage_ties_match_message() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 16, 0).unwrap();
        session.submit_answer("gatto").unwrap();
        for _ in 1..16 {
            session.next_question().unwrap();
        }

        // 1/16 is exactly 6.25
        let s = summary(session.next_question().unwrap());
        assert_eq!(s.questions_asked, 16);
        assert_eq!(s.percentage, 6.2);
        assert_eq!(s.message, "GAME ENDED! Score: 1/16 (6.2%)");
    }

    #[test]
    fn no_questions_asked_is_zero_percent() {
        let mut session = session_with(&[("cat", "gatto")]);
        let s = summary(session.start(Mode::SourceToTarget, 0, 0).unwrap());
        assert_eq!(s.questions_asked, 0);
        assert_eq!(s.percentage, 0.0);
    }

    #[test]
    fn restart_resets_counters() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 5, 2).unwrap();
        session.submit_answer("x").unwrap();
        session.pass_question().unwrap();

        session.start(Mode::TargetToSource, 5, 2).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(session.passes_left(), 2);
        assert!(!session.solution_visible());
        assert_eq!(session.mode(), Mode::TargetToSource);
    }

    #[test]
    fn questions_come_from_the_store() {
        let mut session = session_with(&[("a", "1"), ("b", "2"), ("c", "3")]);
        session.start(Mode::SourceToTarget, 30, 0).unwrap();
        for _ in 0..29 {
            let q = question(session.next_question().unwrap());
            assert!(["a", "b", "c"].contains(&q.text.as_str()));
        }
        assert!(session.next_question().unwrap().is_finished());
    }

    #[test]
    fn failed_load_keeps_previous_vocabulary() {
        let mut session = session_with(&[("cat", "gatto"), ("dog", "cane")]);
        let err = session.load_vocabulary([("nan", "nan")]).unwrap_err();
        assert_eq!(err, QuizError::NoValidRows);
        assert_eq!(session.vocabulary().len(), 2);
    }

    #[test]
    fn status_reports_progress() {
        let mut session = session_with(&[("cat", "gatto")]);
        session.start(Mode::SourceToTarget, 5, 3).unwrap();
        session.submit_answer("gatto").unwrap();

        let status = session.status();
        assert!(status.game_active);
        assert_eq!(status.vocabulary_count, 1);
        assert_eq!(status.score, 1);
        assert_eq!(status.questions_asked, 1);
        assert_eq!(status.passes_left, 3);
        assert_eq!(status.max_passes, 3);
        assert!(!status.audio_enabled);
        assert!(status.usage_info.is_none());
    }

    #[test]
    fn audio_disabled_without_synthesizer() {
        let mut session = session_with(&[("cat", "gatto")]);
        let settings = session.set_languages("english", "italian");
        assert!(!settings.audio_enabled);

        session.start(Mode::SourceToTarget, 5, 0).unwrap();
        assert_eq!(
            session.request_audio().unwrap_err(),
            QuizError::AudioUnavailable("Audio not available".to_string())
        );
    }

    #[test]
    fn other_language_disables_audio() {
        let mut session = audio_session(Arc::new(MockSynthesizer::default()), 1000);
        assert!(session.audio_enabled());

        let settings = session.set_languages("english", "Other");
        assert!(!settings.audio_enabled);
        assert!(settings.usage_info.is_none());
        session.start(Mode::SourceToTarget, 5, 0).unwrap();
        assert!(session.request_audio().is_err());
    }

    #[test]
    fn audio_requires_active_question() {
        let session = audio_session(Arc::new(MockSynthesizer::default()), 1000);
        assert!(matches!(session.request_audio(), Err(QuizError::AudioUnavailable(_))));
    }

    #[tokio::test]
    async fn audio_follows_solution_visibility() {
        let synth = Arc::new(MockSynthesizer::default());
        let mut session = audio_session(synth.clone(), 1000);
        session.start(Mode::SourceToTarget, 5, 0).unwrap();

        let request = session.request_audio().unwrap();
        assert_eq!(request.text, "go");
        assert_eq!(request.language, "english");
        request.execute().await.unwrap();

        session.reveal_solution().unwrap();
        let clip = session.request_audio().unwrap().execute().await.unwrap();
        assert_eq!(clip.text, "andare");
        assert_eq!(clip.language, "italian");

        assert_eq!(
            synth.calls(),
            vec![
                ("go".to_string(), "en-US".to_string()),
                ("andare".to_string(), "it-IT".to_string()),
            ]
        );
        assert_eq!(session.usage_info().characters_used, 8);
        assert_eq!(session.usage_info().requests_made, 2);
    }

    #[tokio::test]
    async fn reverse_mode_speaks_second_language_first() {
        let synth = Arc::new(MockSynthesizer::default());
        let mut session = audio_session(synth.clone(), 1000);
        session.start(Mode::TargetToSource, 5, 0).unwrap();

        let request = session.request_audio().unwrap();
        assert_eq!(request.text, "andare");
        assert_eq!(request.voice.language_code, "it-IT");

        session.submit_answer("wrong").unwrap();
        let request = session.request_audio().unwrap();
        assert_eq!(request.text, "go");
        assert_eq!(request.voice.language_code, "en-US");
    }

    #[tokio::test]
    async fn quota_rejection_leaves_session_untouched() {
        let synth = Arc::new(MockSynthesizer::default());
        let mut session = audio_session(synth.clone(), 1);
        session.start(Mode::SourceToTarget, 5, 1).unwrap();

        let before = session.status();
        let err = session.request_audio().unwrap().spawn().await.unwrap().unwrap_err();
        assert_eq!(
            err,
            QuizError::AudioUnavailable("Monthly limit exceeded. Used: 0/1 characters".to_string())
        );
        assert!(synth.calls().is_empty());

        let after = session.status();
        assert_eq!(after.score, before.score);
        assert_eq!(after.questions_asked, before.questions_asked);
        assert_eq!(after.passes_left, before.passes_left);
        assert!(after.game_active);
    }

    #[tokio::test]
    async fn session_keeps_working_while_audio_runs() {
        let synth = Arc::new(MockSynthesizer::new(MockMode::Error("timeout".to_string())));
        let mut session = audio_session(synth, 1000);
        session.start(Mode::SourceToTarget, 5, 0).unwrap();

        let pending = session.request_audio().unwrap().spawn();
        assert!(session.submit_answer("andare").unwrap().correct);
        session.next_question().unwrap();

        assert!(pending.await.unwrap().is_err());
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 2);
    }
}
