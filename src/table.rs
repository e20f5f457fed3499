//! Tabular access contract and the script dispatch table.

use thiserror::Error ;

use crate::{ ConfigError, EngineError, ScriptConfig, ScriptHost, Value };
use crate::binding::LanguageBinding ;



/// Read-only contract of one row-oriented table.
///
/// Implemented by the fixture source being wrapped; [`ScriptTable`]
/// reproduces it exactly, so callers cannot distinguish a dispatch-wrapped
/// table from a plain one except by observing evaluated values.
pub trait Table {

	/// Error type for raw value reads.
	type Error: std::error::Error + 'static ;

	/// Number of rows in the table.
	fn row_count( &self ) -> usize ;

	/// Name and column layout of the table.
	fn metadata( &self ) -> &TableMetadata ;

	/// Returns the value of one cell.
	///
	/// # Errors
	/// Implementations may fail when the row or column does not exist or the
	/// underlying source is unavailable.
	fn value( &self, row: usize, column: &str ) -> Result<Value, Self::Error> ;

}

impl<T: Table + ?Sized> Table for &T {
	type Error = T::Error ;

	#[inline] fn row_count( &self ) -> usize { T::row_count( self )}
	#[inline] fn metadata( &self ) -> &TableMetadata { T::metadata( self )}
	#[inline] fn value( &self, row: usize, column: &str ) -> Result<Value, Self::Error> {
		T::value( self, row, column )
	}
}

/// Name and column layout of a table.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct TableMetadata {
	/// Table name
	name: String,
	/// Column names, in column order
	columns: Vec<String>,
}

impl TableMetadata {

	/// Creates metadata from a table name and ordered column names.
	pub fn new(
		name: impl Into<String>,
		columns: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			name: name.into(),
			columns: columns.into_iter().map( Into::into ).collect(),
		}
	}

	/// Table name.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Column names, in column order.
	#[inline] pub fn columns( &self ) -> &[String] { &self.columns }

}

/// A table wrapper that evaluates script fields on read.
///
/// Wraps one row-oriented table; on each cell read it detects a script
/// prefix, runs the handler chain, invokes the bound engine, and returns the
/// post-processed result. Non-script values pass through untouched, at no
/// cost beyond a type check and prefix scan. Row count and metadata pass
/// through unchanged. Nothing is materialized or cached: every read re-runs
/// evaluation, so a non-pure script is never masked by a stale result.
pub struct ScriptTable<T> {
	wrapped: T,
	/// Bindings in configuration registration order
	bindings: Vec<LanguageBinding>,
}

impl<T: Table> ScriptTable<T> {

	/// Wraps a table, resolving every configuration against the host.
	///
	/// The built-in handler registry is consulted here, once; cell reads
	/// never touch it.
	///
	/// # Errors
	/// Fails if any configured language has no engine. This is a hard
	/// dependency checked before any row is read; no partially usable table
	/// is produced.
	pub fn new<'c>(
		wrapped: T,
		configs: impl IntoIterator<Item = &'c ScriptConfig>,
		host: &dyn ScriptHost,
	) -> Result<Self, ConfigError> {
		let bindings = configs.into_iter()
			.map(| config | LanguageBinding::resolve( config, host ))
			.collect::<Result<Vec<_>, _>>()?;
		Ok( Self { wrapped, bindings })
	}

}

impl<T: Table> Table for ScriptTable<T> {

	type Error = ReadError<T::Error> ;

	#[inline] fn row_count( &self ) -> usize { self.wrapped.row_count() }

	#[inline] fn metadata( &self ) -> &TableMetadata { self.wrapped.metadata() }

	/// Returns the value of one cell, evaluating script fields.
	///
	/// Prefixes are checked in configuration registration order against the
	/// current value, in a single deterministic pass. Every matching prefix's
	/// pipeline runs in turn against the progressively updated value, so one
	/// pipeline's string result can feed a later binding in the same read.
	fn value( &self, row: usize, column: &str ) -> Result<Value, Self::Error> {
		let mut value = self.wrapped.value( row, column ).map_err( ReadError::Source )?;

		for binding in &self.bindings {
			// only strings can be processed
			let Value::String( text ) = &value else { continue };
			let Some( body ) = text.strip_prefix( binding.prefix() ) else { continue };

			let script = body.to_string();
			value = binding.run( &script ).map_err(| source | ReadError::Script {
				row,
				column: column.to_string(),
				script,
				source,
			})?;
		}

		Ok( value )
	}

}

impl<T> std::fmt::Debug for ScriptTable<T> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ScriptTable" )
			.field( "bindings", &self.bindings )
			.finish_non_exhaustive()
	}
}

/// Errors that can occur when reading a cell through a dispatch table.
#[derive( Error, Debug )]
pub enum ReadError<E: std::error::Error + 'static> {
	/// Reading the raw value from the wrapped table failed.
	#[error( transparent )] Source( E ),
	/// A script field failed to evaluate. Never retried, suppressed, or
	/// converted into a default value; fixtures used for tests must not
	/// silently produce unintended data.
	#[error( "Script \"{script}\" failed in row {row}, column \"{column}\": {source}" )]
	Script {
		/// Row of the offending cell
		row: usize,
		/// Column of the offending cell
		column: String,
		/// The script body as written in the cell, prefix stripped
		script: String,
		/// The underlying engine or handler failure
		source: EngineError,
	},
}
