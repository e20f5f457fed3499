//! Per-language dataset configuration.

use thiserror::Error ;

use crate::{ HandlerFactory, ScriptHandler };



/// Configures the use of one scripting language with a prefix and custom
/// invocation handlers.
///
/// A dataset wrapper takes one or more configurations; multiple languages can
/// coexist in one fixture. Immutable once constructed; the relationship to
/// the binding a table resolves from it is 1:1, materialized lazily at table
/// construction.
pub struct ScriptConfig {
	/// Language name as known to the script host, e.g. `"jruby"`
	language: String,
	/// Literal marker preceding script fields in this language, e.g. `"jruby:"`
	prefix: String,
	/// Factories for the custom handlers, in application order
	handlers: Vec<HandlerFactory>,
}

impl ScriptConfig {

	/// Creates a configuration for one language and prefix.
	///
	/// # Errors
	/// Fails if `language` or `prefix` is empty; both are required.
	pub fn new( language: impl Into<String>, prefix: impl Into<String> ) -> Result<Self, ConfigError> {
		let language = language.into();
		let prefix = prefix.into();
		if language.is_empty() { return Err( ConfigError::EmptyLanguage ) }
		if prefix.is_empty() { return Err( ConfigError::EmptyPrefix ) }
		Ok( Self { language, prefix, handlers: Vec::with_capacity( 0 ) })
	}

	/// Appends a custom handler to this configuration.
	///
	/// Configurations are shared across every table a dataset yields, so they
	/// carry factories rather than handler instances; each table binds its
	/// own fresh handlers. Custom handlers run after the built-ins for the
	/// language in pre-invocation and before them in post-invocation.
	pub fn with_handler<H, F>( mut self, factory: F ) -> Self
	where
		H: ScriptHandler + 'static,
		F: Fn() -> H + Send + Sync + 'static,
	{
		self.handlers.push( Box::new( move || Box::new( factory() )));
		self
	}

	/// Language name as known to the script host.
	#[inline] pub fn language( &self ) -> &str { &self.language }

	/// Literal marker preceding script fields in this language.
	#[inline] pub fn prefix( &self ) -> &str { &self.prefix }

	/// Factories for the custom handlers, in application order.
	#[inline] pub(crate) fn handlers( &self ) -> &[HandlerFactory] { &self.handlers }

}

impl std::fmt::Debug for ScriptConfig {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ScriptConfig" )
			.field( "language", &self.language )
			.field( "prefix", &self.prefix )
			.field( "handlers", &self.handlers.len() )
			.finish_non_exhaustive()
	}
}

/// Errors that prevent a dispatch table or dataset wrapper from being
/// constructed.
///
/// These are hard failures reported before any row is read: a dataset
/// declared with a broken configuration can never produce correct rows, so
/// no partial or degraded table is built.
#[derive( Error, Debug )]
pub enum ConfigError {
	/// A configuration was given an empty language name.
	#[error( "Empty Language Name" )] EmptyLanguage,
	/// A configuration was given an empty script prefix.
	#[error( "Empty Script Prefix" )] EmptyPrefix,
	/// A dataset wrapper was constructed without any configuration.
	#[error( "No Configurations" )] NoConfigurations,
	/// No scripting engine is available for a configured language.
	#[error( "No Scripting Engine For Language: {language}" )] NoEngine {
		/// The language name no engine could be resolved for.
		language: String,
	},
}
