//! Script invocation handler contract.
//!
//! Handlers are called before and after every evaluation of a script field.
//! They can enrich scripts with commonly used imports, or convert evaluation
//! results into values the consuming test framework understands.

use crate::{ EngineHandle, ScriptError, Value };



/// A pre/post processor wrapping every evaluation of scripts in one language.
///
/// Handlers come from two places: **built-ins** registered process-wide for a
/// language through the [`HandlerRegistry`]( crate::HandlerRegistry ), and
/// **custom** handlers supplied per [`ScriptConfig`]( crate::ScriptConfig ).
/// For one evaluation, built-ins run their [`pre_invoke`]( Self::pre_invoke )
/// before any custom handler and their [`post_invoke`]( Self::post_invoke )
/// after any custom handler - the chain wraps like a stack.
///
/// Handlers are expected to be stateless across invocations, though this is
/// not enforced.
pub trait ScriptHandler: Send {

	/// Name of the scripting language this handler applies to when registered
	/// as a built-in, e.g. `"jruby"`.
	fn language( &self ) -> &str ;

	/// Makes the engine bound for the current table available to the handler.
	///
	/// Called once per binding, right after the engine has been resolved and
	/// before the first evaluation. Handlers that post-process results by
	/// calling back into the engine keep the handle; the default
	/// implementation drops it.
	fn bind_engine( &mut self, engine: EngineHandle ) { let _ = engine ; }

	/// Called with the script body before it is evaluated.
	///
	/// Returns the script to be executed, enriched with common imports for
	/// example. The default implementation returns the script unchanged.
	fn pre_invoke( &self, script: String ) -> String { script }

	/// Called with the result after the script has been evaluated.
	///
	/// Returns the result, possibly converted into another representation.
	/// The default implementation returns the result unchanged.
	///
	/// # Errors
	/// Implementations may fail, e.g. when a conversion calls back into the
	/// engine and that evaluation fails. The failure is surfaced to the
	/// caller as an evaluation error.
	fn post_invoke( &self, value: Value ) -> Result<Value, ScriptError> { Ok( value )}

}

/// Factory producing one fresh [`ScriptHandler`] instance per dispatch table.
///
/// Configurations and the built-in registry are shared across every table a
/// dataset yields, while each table binds its own handler instances; so both
/// carry factories rather than handlers.
pub type HandlerFactory = Box<dyn Fn() -> Box<dyn ScriptHandler> + Send + Sync> ;
