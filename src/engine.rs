//! Scripting engine abstraction and resolution.
//!
//! The dispatch core never assumes anything about script semantics: engines
//! are opaque `evaluate( text ) -> value` services keyed by language name.
//! Adapters implement [`ScriptEngine`] per embedded or external interpreter
//! and register them with a [`ScriptHost`].

use std::collections::HashMap ;
use std::sync::{ Arc, Mutex };

use thiserror::Error ;

use crate::Value ;



/// Opaque error produced by a scripting engine or by a handler calling back
/// into one.
pub type ScriptError = Box<dyn std::error::Error + Send + Sync> ;

/// A scripting language runtime, treated as an opaque evaluation service.
pub trait ScriptEngine: Send {

	/// Name of the language this engine evaluates, e.g. `"jruby"`.
	fn language( &self ) -> &str ;

	/// Evaluates a script and returns its result value.
	///
	/// # Errors
	/// Fails when the script cannot be parsed or raises at runtime. The error
	/// is opaque to the dispatch core and surfaced verbatim to the caller.
	fn evaluate( &mut self, script: &str ) -> Result<Value, ScriptError> ;

}

/// Shared handle to one scripting engine instance.
///
/// Engines are typically not safe for concurrent reentrancy, so the handle
/// serializes access: at most one evaluation per engine is in flight at a
/// time, enforced by a mutex rather than assumed. Cloning the handle creates
/// another reference to the same underlying engine.
#[derive( Clone )]
pub struct EngineHandle( Arc<Mutex<dyn ScriptEngine>> );

impl EngineHandle {

	/// Wraps an engine into a shareable, serialized handle.
	pub fn new( engine: impl ScriptEngine + 'static ) -> Self {
		Self( Arc::new( Mutex::new( engine )))
	}

	/// Evaluates a script with exclusive access to the underlying engine.
	///
	/// # Errors
	/// Returns [`EngineError::LockRejected`] if the engine lock is poisoned
	/// (a previous evaluation panicked), or
	/// [`EngineError::RuntimeException`] if the script fails to evaluate.
	pub fn evaluate( &self, script: &str ) -> Result<Value, EngineError> {
		let mut engine = self.0.lock().map_err(|_| EngineError::LockRejected )?;
		engine.evaluate( script ).map_err( EngineError::RuntimeException )
	}

}

impl std::fmt::Debug for EngineHandle {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_tuple( "EngineHandle" ).field( &"<engine>" ).finish()
	}
}

/// Errors that can occur when evaluating a script through an engine handle.
#[derive( Error, Debug )]
pub enum EngineError {
	/// Failed to acquire the engine lock (a previous evaluation panicked).
	#[error( "Lock Rejected" )] LockRejected,
	/// The script failed to parse or raised during execution, either in the
	/// engine itself or in a handler's post-processing.
	#[error( "Runtime Exception: {0}" )] RuntimeException( ScriptError ),
}

/// Resolves engine handles by language name.
///
/// The scripting-host service consulted at table construction time. A `None`
/// for a configured language is a configuration error: a dataset declared to
/// use an unavailable language can never produce correct rows.
pub trait ScriptHost {

	/// Returns a handle to the engine for `language`, if one is available.
	fn engine( &self, language: &str ) -> Option<EngineHandle> ;

}

/// Explicit registration table mapping language names to engines.
///
/// The provided [`ScriptHost`] implementation: callers register each engine
/// adapter once at startup, keyed by the engine's own language name.
#[derive( Default, Debug )]
pub struct EngineRegistry {
	engines: HashMap<String, EngineHandle>,
}

impl EngineRegistry {

	/// Creates an empty registry.
	pub fn new() -> Self { Self::default() }

	/// Registers an engine under its own language name, replacing any engine
	/// previously registered for that language.
	pub fn register( &mut self, engine: impl ScriptEngine + 'static ) -> &mut Self {
		let language = engine.language().to_string();
		self.engines.insert( language, EngineHandle::new( engine ));
		self
	}

}

impl ScriptHost for EngineRegistry {
	fn engine( &self, language: &str ) -> Option<EngineHandle> {
		self.engines.get( language ).cloned()
	}
}
