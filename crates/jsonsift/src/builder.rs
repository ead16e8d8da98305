//! Reassembly of event streams into whole values.
//!
//! A [`ValueAssembler`] consumes the events between a container's `Start`
//! and its matching `End` (or a single scalar event) and builds the value
//! through a [`ValueFactory`]. The selectors hand it every event while a
//! reconstruction is in progress; `apply` returns the finished value once
//! the stack unwinds to the root.
use crate::{event::Event, factory::ValueFactory};

enum Slot<F: ValueFactory> {
    Array(F::Array),
    /// The object container plus the key awaiting its value.
    Object(F::Object, Option<String>),
}

pub(crate) struct ValueAssembler<F: ValueFactory> {
    stack: Vec<Slot<F>>,
}

impl<F: ValueFactory> ValueAssembler<F> {
    pub(crate) fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Feeds one event. Returns the completed value when `event` finished
    /// the outermost container, or immediately for a scalar fed to an
    /// empty assembler.
    pub(crate) fn apply(&mut self, factory: &F, event: Event) -> Option<F::Value> {
        match event {
            Event::MapKey(key) => {
                if let Some(Slot::Object(_, pending)) = self.stack.last_mut() {
                    *pending = Some(key);
                }
                None
            }
            Event::StartMap => {
                self.stack.push(Slot::Object(factory.new_object(), None));
                None
            }
            Event::StartArray => {
                self.stack.push(Slot::Array(factory.new_array()));
                None
            }
            Event::EndMap => match self.stack.pop() {
                Some(Slot::Object(object, _)) => self.attach(factory, factory.object_value(object)),
                _ => None,
            },
            Event::EndArray => match self.stack.pop() {
                Some(Slot::Array(array)) => self.attach(factory, factory.array_value(array)),
                _ => None,
            },
            Event::Null => self.attach(factory, factory.null()),
            Event::Boolean(b) => self.attach(factory, factory.boolean(b)),
            Event::Number(n) => self.attach(factory, factory.number(n)),
            Event::String(s) => self.attach(factory, factory.string(s)),
        }
    }

    fn attach(&mut self, factory: &F, value: F::Value) -> Option<F::Value> {
        match self.stack.last_mut() {
            None => Some(value),
            Some(Slot::Array(array)) => {
                factory.array_push(array, value);
                None
            }
            Some(Slot::Object(object, pending)) => {
                let key = pending.take().unwrap_or_default();
                factory.object_insert(object, key, value);
                None
            }
        }
    }
}
