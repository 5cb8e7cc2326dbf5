// University Registry
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Defines [Message] trait and implementations for all messages in `university_registry_core::message`.

pub use university_registry_core::message::*;
use university_registry_core::*;
use university_registry_runtime::{registry::Event as RegistryEvent, Call, Event, SystemEvent};

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum EventExtractionError {
    #[error("TransactionApplied or TransactionFailed event not found")]
    TransactionStatusMissing,
    #[error("Required event is missing")]
    EventMissing,
}

/// Trait implemented for every registry message
///
/// For every [Call] that is exposed to the user we implement [Message] for the parameters
/// struct of the call.
pub trait Message: Send + 'static {
    /// Output of a successfully applied message.
    ///
    /// This value is extracted from the events that are dispatched when the message is executed in
    /// a block.
    type Output: Send + 'static;

    /// Parse all runtime events emitted by the message and return the appropriate message result.
    ///
    /// Returns an error if the event list is not well formed. For example if an expected event is
    /// missing.
    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError>;

    fn into_runtime_call(self) -> Call;
}

impl Message for message::AddStudent {
    type Output = StudentId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::StudentAdded(student_id) => Some(*student_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::AddStudent(self)
    }
}

impl Message for message::AddProfessor {
    type Output = ProfessorId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::ProfessorAdded(professor_id) => Some(*professor_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::AddProfessor(self)
    }
}

impl Message for message::CreateCourse {
    type Output = CourseId;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::CourseCreated(course_id, _) => Some(*course_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::CreateCourse(self)
    }
}

impl Message for message::UpdateStudent {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::StudentUpdated(_) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::UpdateStudent(self)
    }
}

impl Message for message::EnrollStudent {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::StudentEnrolled(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::EnrollStudent(self)
    }
}

impl Message for message::DropCourse {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::CourseDropped(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::DropCourse(self)
    }
}

impl Message for message::AssignGrade {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::GradeAssigned(_, _, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> Call {
        Call::AssignGrade(self)
    }
}

/// Extracts the dispatch result of a transaction and, if it succeeded, the output from the first
/// registry event `f` maps to a value.
fn extract_registry_result<T>(
    events: &[Event],
    f: impl Fn(&RegistryEvent) -> Option<T>,
) -> Result<Result<T, RegistryError>, EventExtractionError> {
    let dispatch_result = get_dispatch_result(events)?;
    match dispatch_result {
        Ok(()) => {
            let output = events
                .iter()
                .find_map(|event| match event {
                    Event::Registry(registry_event) => f(registry_event),
                    _ => None,
                })
                .ok_or(EventExtractionError::EventMissing)?;
            Ok(Ok(output))
        }
        Err(registry_error) => Ok(Err(registry_error)),
    }
}

/// Looks for [SystemEvent::TransactionApplied] and [SystemEvent::TransactionFailed] in the events
/// and constructs the inner result accordingly. Returns an
/// [EventExtractionError::TransactionStatusMissing] error if none of these events is found.
fn get_dispatch_result(
    events: &[Event],
) -> Result<Result<(), RegistryError>, EventExtractionError> {
    events
        .iter()
        .find_map(|event| match event {
            Event::System(SystemEvent::TransactionApplied) => Some(Ok(())),
            Event::System(SystemEvent::TransactionFailed(registry_error)) => {
                Some(Err(*registry_error))
            }
            _ => None,
        })
        .ok_or(EventExtractionError::TransactionStatusMissing)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_student_output() {
        let events = vec![
            SystemEvent::TransactionApplied.into(),
            RegistryEvent::StudentAdded(7).into(),
        ];
        let result = message::AddStudent::result_from_events(events).unwrap();
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn failed_transaction() {
        let events = vec![SystemEvent::TransactionFailed(RegistryError::AlreadyEnrolled).into()];
        let result = message::EnrollStudent::result_from_events(events).unwrap();
        assert_eq!(result, Err(RegistryError::AlreadyEnrolled));
    }

    #[test]
    fn empty_events() {
        let result = message::DropCourse::result_from_events(vec![]);
        assert_eq!(result, Err(EventExtractionError::TransactionStatusMissing));
    }

    #[test]
    fn registry_event_missing() {
        let events = vec![
            SystemEvent::TransactionApplied.into(),
            RegistryEvent::StudentAdded(1).into(),
        ];
        let result = message::CreateCourse::result_from_events(events);
        assert_eq!(result, Err(EventExtractionError::EventMissing));
    }
}
