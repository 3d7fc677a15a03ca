// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock kernel for testing.
//!
//! This provides a [`Kernel`] backed by in-memory queues, allowing the
//! orchestration loop to be tested without a scheduler.
//!
//! Tasks do not run concurrently. When a task is created the mock calls its
//! entry point and then plays back the task's [`TaskScript`]: optionally
//! setting the shared error flag and sending one message on the task channel.
//! That is exactly what a real test task would have done by the time the
//! engine's blocking receive returns.

use super::{Kernel, KernelError, TaskSpec};
use crate::engine::ErrorFlag;
use anckor_abi::{ChannelHandle, Message, Priority, TEST_CHANNEL_NAME, TaskHandle};
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

/// Scripted behaviour of one mocked test task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskScript {
    /// Value passed to the error flag setter, if the task calls it.
    pub set_error: Option<bool>,
    /// Message the task sends on the task channel, if any.
    pub message: Option<Message>,
}

impl TaskScript {
    /// Sends the sentinel and leaves the error flag alone.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            set_error: None,
            message: Some(Message::test_end()),
        }
    }

    /// Sets the error flag, then sends the sentinel.
    #[must_use]
    pub const fn fail() -> Self {
        Self {
            set_error: Some(true),
            message: Some(Message::test_end()),
        }
    }

    /// Clears the error flag, then sends the sentinel.
    #[must_use]
    pub const fn clear_error() -> Self {
        Self {
            set_error: Some(false),
            message: Some(Message::test_end()),
        }
    }

    /// Sends an arbitrary word instead of the sentinel.
    #[must_use]
    pub const fn send(payload: u64) -> Self {
        Self {
            set_error: None,
            message: Some(Message::word(payload)),
        }
    }

    /// Sends an arbitrary message.
    #[must_use]
    pub const fn send_message(message: Message) -> Self {
        Self {
            set_error: None,
            message: Some(message),
        }
    }

    /// Never signals completion.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            set_error: None,
            message: None,
        }
    }

    /// Same script, additionally setting the error flag to `state` first.
    #[must_use]
    pub const fn with_error(self, state: bool) -> Self {
        Self {
            set_error: Some(state),
            message: self.message,
        }
    }
}

impl Default for TaskScript {
    fn default() -> Self {
        Self::pass()
    }
}

/// Observable kernel calls, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelEvent {
    /// A channel was created.
    ChannelCreated {
        /// Channel name.
        name: &'static str,
        /// Handle handed out.
        handle: ChannelHandle,
    },
    /// A task was created.
    TaskCreated {
        /// Task name.
        name: String,
        /// Stack handle of the task.
        handle: TaskHandle,
        /// Requested priority.
        priority: Priority,
    },
    /// A message was sent.
    Sent {
        /// Target channel.
        channel: ChannelHandle,
        /// Sent message.
        message: Message,
    },
    /// A message was received.
    Received {
        /// Source channel.
        channel: ChannelHandle,
        /// Received message.
        message: Message,
    },
    /// A task was destroyed.
    TaskDestroyed {
        /// Stack handle of the task.
        handle: TaskHandle,
    },
}

struct MockChannel {
    name: &'static str,
    handle: ChannelHandle,
    queue: VecDeque<Message>,
}

/// A mock kernel with scripted tasks.
///
/// Channel handles are assigned sequentially starting at 1. Receiving on an
/// empty channel panics: on a real kernel the caller would block forever.
pub struct MockKernel<'f> {
    error_flag: &'f ErrorFlag,
    task_channel: &'static str,
    channels: Vec<MockChannel>,
    next_channel: u64,
    scripts: Vec<(&'static str, TaskScript)>,
    live: Vec<TaskHandle>,
    max_live: usize,
    created: Vec<String>,
    events: Vec<KernelEvent>,
    channel_limit: usize,
    failing_task: Option<&'static str>,
    failing_destroy: Option<&'static str>,
    failing_receive: Option<&'static str>,
}

impl<'f> MockKernel<'f> {
    /// Create a mock kernel whose tasks write to `error_flag`.
    #[must_use]
    pub const fn new(error_flag: &'f ErrorFlag) -> Self {
        Self {
            error_flag,
            task_channel: TEST_CHANNEL_NAME,
            channels: Vec::new(),
            next_channel: 1,
            scripts: Vec::new(),
            live: Vec::new(),
            max_live: 0,
            created: Vec::new(),
            events: Vec::new(),
            channel_limit: usize::MAX,
            failing_task: None,
            failing_destroy: None,
            failing_receive: None,
        }
    }

    /// Script the behaviour of the task named `name`.
    ///
    /// Tasks without a script behave like [`TaskScript::pass`].
    #[must_use]
    pub fn with_script(mut self, name: &'static str, script: TaskScript) -> Self {
        self.script(name, script);
        self
    }

    /// Script the behaviour of the task named `name`, replacing any earlier script.
    pub fn script(&mut self, name: &'static str, script: TaskScript) {
        self.scripts.retain(|(existing, _)| *existing != name);
        self.scripts.push((name, script));
    }

    /// Name of the channel scripted tasks send on.
    #[must_use]
    pub fn with_task_channel(mut self, name: &'static str) -> Self {
        self.task_channel = name;
        self
    }

    /// Limit the number of channels that can be created.
    #[must_use]
    pub fn with_channel_limit(mut self, limit: usize) -> Self {
        self.channel_limit = limit;
        self
    }

    /// Make creation of the task named `name` fail.
    #[must_use]
    pub fn with_failing_task(mut self, name: &'static str) -> Self {
        self.failing_task = Some(name);
        self
    }

    /// Make destruction of the task named `name` fail.
    #[must_use]
    pub fn with_failing_destroy(mut self, name: &'static str) -> Self {
        self.failing_destroy = Some(name);
        self
    }

    /// Make receiving fail while the task named `name` is the newest task.
    #[must_use]
    pub fn with_failing_receive(mut self, name: &'static str) -> Self {
        self.failing_receive = Some(name);
        self
    }

    /// All kernel calls so far.
    #[must_use]
    pub fn events(&self) -> &[KernelEvent] {
        &self.events
    }

    /// Handles of tasks that are currently alive.
    #[must_use]
    pub fn live_tasks(&self) -> &[TaskHandle] {
        &self.live
    }

    /// Highest number of tasks that were alive at the same time.
    #[must_use]
    pub const fn max_live_tasks(&self) -> usize {
        self.max_live
    }

    /// Names of all created tasks, in creation order.
    #[must_use]
    pub fn created_tasks(&self) -> Vec<&str> {
        self.created.iter().map(String::as_str).collect()
    }

    /// Number of undelivered messages on the channel called `name`.
    #[must_use]
    pub fn pending(&self, name: &str) -> usize {
        self.channels
            .iter()
            .rev()
            .find(|channel| channel.name == name)
            .map_or(0, |channel| channel.queue.len())
    }

    fn channel_mut(&mut self, handle: ChannelHandle) -> Result<&mut MockChannel, KernelError> {
        self.channels
            .iter_mut()
            .find(|channel| channel.handle == handle)
            .ok_or(KernelError::NoSuchChannel)
    }

    fn script_for(&self, name: &str) -> TaskScript {
        self.scripts
            .iter()
            .find(|(scripted, _)| *scripted == name)
            .map_or_else(TaskScript::pass, |(_, script)| *script)
    }

    fn play(&mut self, script: TaskScript) {
        if let Some(state) = script.set_error {
            self.error_flag.set(state);
        }
        if let Some(message) = script.message {
            // A task whose channel does not exist cannot signal anyone
            let Ok(channel) = self.lookup_channel(self.task_channel) else {
                return;
            };
            if let Ok(target) = self.channel_mut(channel) {
                target.queue.push_back(message);
            }
            self.events.push(KernelEvent::Sent { channel, message });
        }
    }
}

impl Kernel for MockKernel<'_> {
    fn create_channel(&mut self, name: &'static str) -> Result<ChannelHandle, KernelError> {
        if self.channels.len() >= self.channel_limit {
            return Err(KernelError::ResourceExhausted);
        }
        let handle = ChannelHandle::new(self.next_channel);
        self.next_channel += 1;
        self.channels.push(MockChannel {
            name,
            handle,
            queue: VecDeque::new(),
        });
        self.events.push(KernelEvent::ChannelCreated { name, handle });
        Ok(handle)
    }

    fn lookup_channel(&self, name: &str) -> Result<ChannelHandle, KernelError> {
        // The most recently created channel of a name shadows older ones
        self.channels
            .iter()
            .rev()
            .find(|channel| channel.name == name)
            .map(|channel| channel.handle)
            .ok_or(KernelError::NoSuchChannel)
    }

    fn send(&mut self, channel: ChannelHandle, payload: u64) -> Result<(), KernelError> {
        let message = Message::word(payload);
        self.channel_mut(channel)?.queue.push_back(message);
        self.events.push(KernelEvent::Sent { channel, message });
        Ok(())
    }

    #[expect(
        clippy::panic,
        reason = "test mock panics intentionally where a real kernel would block forever"
    )]
    fn receive(&mut self, channel: ChannelHandle) -> Result<Message, KernelError> {
        let newest = self.created.last().map(String::as_str);
        if self.failing_receive.is_some_and(|name| newest == Some(name)) {
            return Err(KernelError::Status(anckor_abi::types::K_ERROR));
        }
        let Some(message) = self.channel_mut(channel)?.queue.pop_front() else {
            panic!("MockKernel: receive on {channel} would block forever");
        };
        self.events.push(KernelEvent::Received { channel, message });
        Ok(message)
    }

    fn create_task(&mut self, task: &TaskSpec<'_>) -> Result<(), KernelError> {
        if self.failing_task.is_some_and(|name| name == task.name) {
            return Err(KernelError::ResourceExhausted);
        }
        let handle = task.handle();
        if self.live.contains(&handle) {
            return Err(KernelError::TaskExists);
        }

        self.live.push(handle);
        self.max_live = self.max_live.max(self.live.len());
        self.created.push(task.name.into());
        self.events.push(KernelEvent::TaskCreated {
            name: task.name.into(),
            handle,
            priority: task.priority,
        });

        (task.entry)();
        let script = self.script_for(task.name);
        self.play(script);
        Ok(())
    }

    fn destroy_task(&mut self, task: TaskHandle) -> Result<(), KernelError> {
        let Some(index) = self.live.iter().position(|live| *live == task) else {
            return Err(KernelError::NoSuchTask);
        };
        if let Some(name) = self.failing_destroy {
            let created = self.events.iter().rev().find_map(|event| match event {
                KernelEvent::TaskCreated {
                    name: created,
                    handle,
                    ..
                } if *handle == task => Some(created.as_str()),
                _ => None,
            });
            if created == Some(name) {
                return Err(KernelError::Status(anckor_abi::types::K_ERROR));
            }
        }
        self.live.swap_remove(index);
        self.events.push(KernelEvent::TaskDestroyed { handle: task });
        Ok(())
    }
}
